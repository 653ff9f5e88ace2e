mod config;
mod consts;
mod dataset;
mod dispatch;
mod events;
mod layout;
mod logging;
mod pretty;
mod render;
mod session;
mod state;
mod ui;
mod web;

use crate::config::Config;
use crate::dataset::Iso;
use crate::pretty::{handle_cmd_error, print_cmd_error, print_cmd_info};
use crate::session::{SessionData, run_inspect, run_serve_mode, run_tui_mode, setup_session};
use crate::state::Metric;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// JSON configuration file. Defaults to ~/.kiva-explore/config.json when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding totals.csv, genders.csv, sectors.csv and mpi.csv
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory holding the images/ and wordclouds/ folders
    #[arg(long, global = true, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long)]
        port: Option<u16>,

        /// Log at debug level unless RUST_LOG says otherwise
        #[arg(long, default_value_t = false)]
        debug: bool,
    },
    /// Explore the dashboard in the terminal
    Explore {
        /// Disable background colors
        #[arg(long = "no-background-color", action = clap::ArgAction::SetFalse)]
        with_background: bool,
    },
    /// Select a country and print every re-rendered view as JSON
    Inspect {
        /// Three-letter country code, e.g. MLI
        #[arg(long, value_name = "ISO")]
        iso: Iso,

        /// Switch the map metric first (MPI or GII)
        #[arg(long, value_name = "METRIC")]
        metric: Option<Metric>,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Where to write the configuration
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

/// Resolves the configuration and applies the global flag overrides.
fn resolve_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let mut config = Config::resolve(args.config.as_deref()).map_err(|e| {
        handle_cmd_error!(e, "Failed to load configuration")
    })?;
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &args.assets_dir {
        config.assets_dir = dir.clone();
    }
    Ok(config)
}

fn load_session(config: Config) -> Result<SessionData, Box<dyn Error>> {
    let data_dir = config.data_dir.clone();
    setup_session(config).map_err(|e| {
        pretty::print_data_error_header(&data_dir);
        print_cmd_error!("Failed to load dataset", "{}", e);
        e
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match &args.command {
        Command::Serve { host, port, debug } => {
            logging::init(*debug);
            let mut config = resolve_config(&args)?;
            if let Some(host) = host {
                config.host = host.clone();
            }
            if let Some(port) = port {
                config.port = *port;
            }
            let session = load_session(config)?;
            run_serve_mode(session).await
        }
        Command::Explore { with_background } => {
            // No console logger here: it would draw over the terminal UI. Activity goes to
            // the dashboard's log panel instead.
            let config = resolve_config(&args)?;
            let session = load_session(config)?;
            run_tui_mode(session, *with_background).await
        }
        Command::Inspect { iso, metric } => {
            logging::init(false);
            let config = resolve_config(&args)?;
            let session = load_session(config)?;
            let report = run_inspect(session, iso.clone(), *metric);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::InitConfig { path } => {
            Config::default()
                .save(path)
                .map_err(|e| handle_cmd_error!(e, "Failed to save config"))?;
            print_cmd_info!("Config written", "{}", path.display());
            Ok(())
        }
    }
}
