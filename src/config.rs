//! Application configuration.

use crate::consts::cli_consts::{
    DEFAULT_ASSETS_DIR, DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_ISO, DEFAULT_LINK_TEMPLATE,
    DEFAULT_PORT,
};
use crate::dataset::Iso;
use crate::state::Metric;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding `totals.csv`, `genders.csv`, `sectors.csv` and `mpi.csv`.
    pub data_dir: PathBuf,
    /// Directory holding the `images/` and `wordclouds/` folders.
    pub assets_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// Country selected at startup.
    pub default_iso: Iso,
    pub default_metric: Metric,
    /// Outbound borrower link; `{code}` becomes the two-letter country prefix.
    pub link_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_iso: Iso::from_static(DEFAULT_ISO),
            default_metric: Metric::default(),
            link_template: DEFAULT_LINK_TEMPLATE.to_string(),
        }
    }
}

/// `~/.kiva-explore/config.json`
pub fn get_config_path() -> Result<PathBuf, io::Error> {
    let home_path = home::home_dir().ok_or(io::Error::new(
        io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(".kiva-explore").join("config.json"))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Picks the configuration to run with: `explicit` must exist if given, otherwise the
    /// default path is used when present, otherwise built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, io::Error> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match get_config_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Address the HTTP front end binds to.
    pub fn bind_address(&self) -> String {
        match self.host.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            // Hostnames such as "localhost" are left for the resolver.
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}
