use crate::{
    AppCommand, AppResult, BusyGuard, BusyTracker, ConfigSettings, DesktopDialogs,
    DesktopNotifier, MenuIds, TrayCommand, TrayMenuHost, TrayProxy, config::BehaviourConfig,
};

use std::sync::Arc;

use dell_thermal_core::{
    Activation, ModeSelector, PrivilegedRunner, SecretArm, ThermalError, ThermalMode,
    TokioLauncher,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// Privileged runner wired to the desktop dialogs.
pub(crate) type DesktopRunner = PrivilegedRunner<TokioLauncher, DesktopDialogs, DesktopDialogs>;

/// Mode selector wired to the tray, the config file and notifications.
pub(crate) type TraySelector =
    ModeSelector<DesktopRunner, TrayMenuHost, ConfigSettings, DesktopNotifier>;

/// Main application state.
///
/// Runs on the async runtime thread. Communicates tray updates back to the
/// main thread via `tray` because `TrayIcon` is `!Send` and must remain on
/// the UI thread.
pub struct App {
    pub(crate) selector: Arc<TraySelector>,
    pub(crate) secret_arm: Arc<SecretArm>,
    pub(crate) behaviour: BehaviourConfig,
    pub(crate) tray: TrayProxy,
    pub(crate) menu_ids: MenuIds,
    pub(crate) busy: Arc<BusyTracker>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Dell thermal management starting");

        self.selector.initialize().await?;

        if self.behaviour.query_on_startup {
            self.synchronize();
        }

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when tray_event_rx is dropped (main loop breaks),
        // tray_event_tx.blocking_send() fails, breaking the blocking loop.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        while let Some(event) = tray_event_rx.recv().await {
            match self.menu_ids.command_for(&event.id) {
                Some(AppCommand::Activate(mode)) => self.activate(mode).await,
                Some(AppCommand::ToggleSecretArm) => self.toggle_secret_arm(),
                Some(AppCommand::Synchronize) => self.synchronize(),
                Some(AppCommand::Shutdown) => {
                    info!("Exit requested from tray menu");
                    break;
                }
                None => debug!(id = ?event.id, "Ignoring menu event"),
            }
        }

        self.selector.teardown().await;
        drop(tray_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        if let Err(e) = self.tray.send(TrayCommand::Shutdown) {
            error!(error = ?e, "Failed to send shutdown to tray thread");
        }
        info!("Dell thermal management shut down successfully");

        Ok(())
    }

    /// Start switching to `mode` in the background.
    #[instrument(skip(self))]
    async fn activate(&self, mode: ThermalMode) {
        // The clicked check item toggled itself; show the real state until
        // the command succeeds.
        self.selector.refresh_markers().await;

        let requires_secret = self.take_secret_requirement();
        let selector = Arc::clone(&self.selector);
        let busy = BusyGuard::new(Arc::clone(&self.busy));

        tokio::spawn(async move {
            let _busy = busy;
            match selector.activate(mode, requires_secret).await {
                Ok(Activation::Applied) => info!(mode = mode.setting_key(), "Thermal mode applied"),
                Ok(outcome) => debug!(mode = mode.setting_key(), outcome = ?outcome, "Thermal mode not applied"),
                Err(e) => report_failure("activate", &e),
            }
        });
    }

    /// Read the active mode from the BIOS in the background.
    fn synchronize(&self) {
        let requires_secret = self.take_secret_requirement();
        let selector = Arc::clone(&self.selector);
        let busy = BusyGuard::new(Arc::clone(&self.busy));

        tokio::spawn(async move {
            let _busy = busy;
            match selector.synchronize(requires_secret).await {
                Ok(Some(mode)) => info!(mode = mode.setting_key(), "Thermal mode read from BIOS"),
                Ok(None) => debug!("Thermal mode query result dropped"),
                Err(e) => report_failure("synchronize", &e),
            }
        });
    }

    fn toggle_secret_arm(&self) {
        let armed = self.secret_arm.toggle();
        info!(armed, "BIOS setup password prompt toggled");
        self.mirror_secret_arm(armed);
    }

    /// Whether the next request must collect the BIOS setup password.
    ///
    /// Consumes the one-shot switch.
    fn take_secret_requirement(&self) -> bool {
        let demand = self.secret_arm.demand(self.behaviour.require_setup_password);
        if demand.consumed {
            self.mirror_secret_arm(false);
        }
        demand.prompt
    }

    fn mirror_secret_arm(&self, armed: bool) {
        if let Err(e) = self.tray.send(TrayCommand::SetSecretArmed(armed)) {
            warn!(error = ?e, "Failed to update password switch entry");
        }
    }
}

fn report_failure(operation: &str, e: &ThermalError) {
    match e {
        ThermalError::SecretPromptCancelled { .. } => {
            info!(operation, "Request aborted, BIOS setup password not provided")
        }
        _ => error!(operation, error = %e, "Thermal request failed"),
    }
}
