use crate::{AppError, AppResult, TrayIconState};

use std::{
    panic::Location,
    sync::{Arc, Mutex},
};

use dell_thermal_core::ThermalMode;
use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    /// Update the tray icon to a new state.
    SetState(TrayIconState),
    /// Check or uncheck the menu entry for a thermal mode.
    SetMarker {
        /// Entry to update.
        mode: ThermalMode,
        /// Whether the entry is the active mode.
        selected: bool,
    },
    /// Mirror the BIOS setup password switch on its check entry.
    SetSecretArmed(bool),
    /// Remove the thermal mode submenu and its entries.
    RemoveModeEntries,
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}

/// Sending half of the tray command channel, shareable across tasks.
#[derive(Clone)]
pub struct TrayProxy {
    proxy: Arc<Mutex<EventLoopProxy<TrayCommand>>>,
}

impl TrayProxy {
    /// Wrap the event loop proxy of the tray thread.
    pub fn new(proxy: EventLoopProxy<TrayCommand>) -> Self {
        Self {
            proxy: Arc::new(Mutex::new(proxy)),
        }
    }

    /// Deliver `command` to the tray thread.
    #[track_caller]
    pub fn send(&self, command: TrayCommand) -> AppResult<()> {
        let proxy = self.proxy.lock().map_err(|e| AppError::ChannelSendFailed {
            message: format!("Tray proxy lock poisoned: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        proxy
            .send_event(command)
            .map_err(|_| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: event loop closed", command),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
