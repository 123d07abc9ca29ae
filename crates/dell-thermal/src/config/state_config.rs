use serde::{Deserialize, Serialize};

/// State persisted across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfig {
    /// Setting key of the last applied thermal mode.
    #[serde(
        rename = "current-thermal-mode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_thermal_mode: Option<String>,
}
