//! Session setup and initialization

use crate::config::Config;
use crate::dataset::Dataset;
use crate::dispatch::Dispatcher;
use crate::render::AssetStore;
use crate::state::ViewState;
use log::{info, warn};
use std::error::Error;

/// Session data for both the web and terminal front ends
#[derive(Debug)]
pub struct SessionData {
    /// Owns the dataset and the shared selection state
    pub dispatcher: Dispatcher,
    /// Resolved configuration the session was built from
    pub config: Config,
}

/// Loads the dataset and builds the dispatcher
///
/// Any problem with the CSV tables is fatal: the dashboard never starts half-loaded.
///
/// # Arguments
/// * `config` - Resolved configuration (CLI overrides already applied)
///
/// # Returns
/// * `Ok(SessionData)` - Dataset loaded and initial state set
/// * `Err` - A table is missing or malformed
pub fn setup_session(config: Config) -> Result<SessionData, Box<dyn Error>> {
    let dataset = Dataset::load(&config.data_dir)?;
    if dataset.is_empty() {
        warn!("totals.csv has no rows; the map and country table will be empty");
    } else if dataset.country(&config.default_iso).is_none() {
        warn!(
            "Default country {} has no row in totals.csv; views will show placeholders",
            config.default_iso
        );
    }
    let assets = AssetStore::new(&config.assets_dir);
    info!("Serving images from {}", assets.root().display());

    let initial = ViewState::new(Some(config.default_iso.clone()), config.default_metric);
    let dispatcher = Dispatcher::new(dataset, assets, config.link_template.clone(), initial);
    Ok(SessionData { dispatcher, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;
    use crate::state::Metric;
    use tempfile::tempdir;

    #[test]
    fn test_session_starts_on_configured_country() {
        let dir = tempdir().unwrap();
        fixtures::write_to(dir.path());
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            default_iso: fixtures::iso("KEN"),
            default_metric: Metric::Gii,
            ..Config::default()
        };

        let session = setup_session(config).unwrap();
        let state = session.dispatcher.state();
        assert_eq!(state.selection(), Some(&fixtures::iso("KEN")));
        assert_eq!(state.metric(), Metric::Gii);
        assert_eq!(session.dispatcher.dataset().len(), 4);
    }

    #[test]
    fn test_missing_data_dir_fails() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().join("nope"),
            ..Config::default()
        };
        assert!(setup_session(config).is_err());
    }
}
