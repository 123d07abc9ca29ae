use crate::config::{
    default_notifications, default_query_on_startup, default_require_setup_password,
};

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Show a desktop notification after each successful mode change.
    #[serde(default = "default_notifications")]
    pub notifications: bool,

    /// Prompt for the BIOS setup password on every request.
    #[serde(default = "default_require_setup_password")]
    pub require_setup_password: bool,

    /// Read the active mode from the BIOS at startup. Prompts for elevation.
    #[serde(default = "default_query_on_startup")]
    pub query_on_startup: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            notifications: default_notifications(),
            require_setup_password: default_require_setup_password(),
            query_on_startup: default_query_on_startup(),
        }
    }
}
