use dell_thermal_core::DEFAULT_CCTK_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dell Command | Configure CLI location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CctkConfig {
    /// Path to the `cctk` binary.
    #[serde(default = "default_binary_path")]
    pub binary_path: PathBuf,
}

impl Default for CctkConfig {
    fn default() -> Self {
        Self {
            binary_path: default_binary_path(),
        }
    }
}

fn default_binary_path() -> PathBuf {
    PathBuf::from(DEFAULT_CCTK_PATH)
}
