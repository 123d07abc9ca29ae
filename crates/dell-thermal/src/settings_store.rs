use crate::config::Config;

use std::{
    panic::Location,
    path::PathBuf,
    sync::Mutex,
};

use dell_thermal_core::{CoreResult, ThermalError, host::SettingsStore};
use error_location::ErrorLocation;
use tracing::debug;

/// [`SettingsStore`] persisting `current-thermal-mode` in the TOML config.
pub struct ConfigSettings {
    config: Mutex<Config>,
    path: PathBuf,
}

impl ConfigSettings {
    /// Persist through the config file at `path`, starting from `config`.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            config: Mutex::new(config),
            path,
        }
    }

    #[track_caller]
    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, Config>> {
        self.config.lock().map_err(|e| ThermalError::Settings {
            reason: format!("Config lock poisoned: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl SettingsStore for ConfigSettings {
    fn current_mode(&self) -> CoreResult<Option<String>> {
        Ok(self.lock()?.state.current_thermal_mode.clone())
    }

    fn store_mode(&self, key: &str) -> CoreResult<()> {
        let mut config = self.lock()?;

        let mut updated = config.clone();
        updated.state.current_thermal_mode = Some(key.to_string());
        updated
            .save_to(&self.path)
            .map_err(|e| ThermalError::Settings {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        *config = updated;
        debug!(key = %key, "Stored current thermal mode");

        Ok(())
    }
}
