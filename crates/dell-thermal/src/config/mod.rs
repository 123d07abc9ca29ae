mod behaviour_config;
mod cctk_config;
#[allow(clippy::module_inception)]
mod config;
mod elevation_config;
mod state_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, cctk_config::CctkConfig, config::Config,
    elevation_config::ElevationConfig, state_config::StateConfig,
};

use crate::{AppError, AppResult};

use std::panic::Location;

use directories::ProjectDirs;
use error_location::ErrorLocation;

pub(crate) const DEFAULT_NOTIFICATIONS: bool = true;
pub(crate) const DEFAULT_REQUIRE_SETUP_PASSWORD: bool = false;
pub(crate) const DEFAULT_QUERY_ON_STARTUP: bool = false;

pub(crate) fn default_notifications() -> bool {
    DEFAULT_NOTIFICATIONS
}

pub(crate) fn default_require_setup_password() -> bool {
    DEFAULT_REQUIRE_SETUP_PASSWORD
}

pub(crate) fn default_query_on_startup() -> bool {
    DEFAULT_QUERY_ON_STARTUP
}

/// Platform directories for config, data and logs.
#[track_caller]
pub(crate) fn project_dirs() -> AppResult<ProjectDirs> {
    ProjectDirs::from("com", "dell-thermal", "Dell-Thermal").ok_or_else(|| AppError::ConfigError {
        reason: "Failed to get project directories".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
