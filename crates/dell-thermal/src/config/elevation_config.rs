use dell_thermal_core::{DEFAULT_ELEVATION_HELPER, DEFAULT_TARGET_USER};
use serde::{Deserialize, Serialize};

/// Privilege elevation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevationConfig {
    /// Elevation helper program.
    #[serde(default = "default_helper")]
    pub helper: String,

    /// Account the helper switches to.
    #[serde(default = "default_user")]
    pub user: String,
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            helper: default_helper(),
            user: default_user(),
        }
    }
}

fn default_helper() -> String {
    DEFAULT_ELEVATION_HELPER.to_string()
}

fn default_user() -> String {
    DEFAULT_TARGET_USER.to_string()
}
