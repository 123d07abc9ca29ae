use crate::{TrayCommand, TrayProxy};

use dell_thermal_core::{ThermalMode, host::MenuHost};
use tracing::warn;

/// [`MenuHost`] that forwards marker changes to the tray thread.
pub struct TrayMenuHost {
    tray: TrayProxy,
}

impl TrayMenuHost {
    /// Create a host sending through `tray`.
    pub fn new(tray: TrayProxy) -> Self {
        Self { tray }
    }
}

impl MenuHost for TrayMenuHost {
    fn set_marker(&self, mode: ThermalMode, selected: bool) {
        if let Err(e) = self.tray.send(TrayCommand::SetMarker { mode, selected }) {
            warn!(error = ?e, mode = mode.setting_key(), "Failed to update menu marker");
        }
    }

    fn remove_entries(&self) {
        if let Err(e) = self.tray.send(TrayCommand::RemoveModeEntries) {
            warn!(error = ?e, "Failed to remove thermal mode entries");
        }
    }
}
