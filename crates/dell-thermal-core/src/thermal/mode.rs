use std::fmt;

/// Argument name the vendor utility uses for thermal management.
pub(crate) const THERMAL_MANAGEMENT_FLAG: &str = "--ThermalManagement";

/// One of the four vendor-defined cooling presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThermalMode {
    /// Balanced fan and performance profile.
    Optimized,
    /// Reduced fan noise.
    Quiet,
    /// Lower surface temperature.
    Cool,
    /// Maximum performance, loudest fans.
    UltraPerformance,
}

impl ThermalMode {
    /// All modes in menu order.
    pub const ALL: [ThermalMode; 4] = [
        ThermalMode::Optimized,
        ThermalMode::Quiet,
        ThermalMode::Cool,
        ThermalMode::UltraPerformance,
    ];

    /// Value passed to `--ThermalManagement=`.
    pub fn cli_value(self) -> &'static str {
        match self {
            ThermalMode::Optimized => "Optimized",
            ThermalMode::Quiet => "Quiet",
            ThermalMode::Cool => "Cool",
            ThermalMode::UltraPerformance => "UltraPerformance",
        }
    }

    /// Identifier stored in the `current-thermal-mode` setting.
    pub fn setting_key(self) -> &'static str {
        match self {
            ThermalMode::Optimized => "optimized",
            ThermalMode::Quiet => "quiet",
            ThermalMode::Cool => "cool",
            ThermalMode::UltraPerformance => "ultraPerformance",
        }
    }

    /// Human-readable label used in menus and notifications.
    pub fn display_name(self) -> &'static str {
        match self {
            ThermalMode::Optimized => "Optimized",
            ThermalMode::Quiet => "Quiet",
            ThermalMode::Cool => "Cool",
            ThermalMode::UltraPerformance => "Ultra Performance",
        }
    }

    /// Look up a mode by its persisted setting key. Matching is exact.
    pub fn from_setting_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.setting_key() == key)
    }

    /// Look up a mode by the value the vendor utility uses.
    pub fn from_cli_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.cli_value() == value)
    }

    /// Extract the active mode from a `cctk --ThermalManagement` report.
    ///
    /// The utility prints `ThermalManagement=<Value>`; the last matching line
    /// wins and surrounding whitespace is ignored.
    pub fn from_report(report: &str) -> Option<Self> {
        report.lines().rev().find_map(|line| {
            let value = line.trim().strip_prefix("ThermalManagement=")?;
            Self::from_cli_value(value.trim())
        })
    }

    /// Argument that switches the utility to this mode.
    pub fn cli_argument(self) -> String {
        format!("{}={}", THERMAL_MANAGEMENT_FLAG, self.cli_value())
    }

    /// Notification text announcing a successful switch to this mode.
    pub fn change_notice(self) -> String {
        format!("Dell Thermal Mode changed to {}", self.display_name())
    }
}

impl fmt::Display for ThermalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
