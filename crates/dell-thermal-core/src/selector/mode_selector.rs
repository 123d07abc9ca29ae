//! Thermal mode menu logic.
//!
//! Owns the "which mode is marked" state and keeps the menu markers, the
//! persisted setting and user notifications consistent with the last
//! successfully applied mode.

use crate::{
    CommandRequest, CoreResult, ThermalError, ThermalMode,
    command::CommandRunner,
    host::{MenuHost, NotificationSink, SettingsStore},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

/// What happened to a completed activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Markers, settings and notification were updated.
    Applied,
    /// A newer request was applied first; this result was dropped.
    Superseded,
    /// The selector was torn down before the request finished.
    Detached,
}

#[derive(Debug, Default)]
struct SelectorState {
    current: Option<ThermalMode>,
    issued: u64,
    applied: u64,
    detached: bool,
}

impl SelectorState {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }
}

/// Four mutually exclusive thermal mode entries bound to the vendor utility.
pub struct ModeSelector<R, H, S, N> {
    runner: R,
    host: H,
    settings: S,
    notifier: N,
    state: Mutex<SelectorState>,
}

impl<R, H, S, N> ModeSelector<R, H, S, N>
where
    R: CommandRunner,
    H: MenuHost,
    S: SettingsStore,
    N: NotificationSink,
{
    /// Create a selector wired to its collaborators. Call
    /// [`initialize`](Self::initialize) before use.
    pub fn new(runner: R, host: H, settings: S, notifier: N) -> Self {
        Self {
            runner,
            host,
            settings,
            notifier,
            state: Mutex::new(SelectorState::default()),
        }
    }

    /// Mark the persisted mode, if it is one we recognize.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> CoreResult<Option<ThermalMode>> {
        let stored = self.settings.current_mode()?;
        let mode = stored.as_deref().and_then(ThermalMode::from_setting_key);

        if let (None, Some(key)) = (mode, &stored) {
            warn!(key = %key, "Ignoring unrecognized persisted thermal mode");
        }

        let mut state = self.state.lock().await;
        state.current = mode;
        self.render_markers(mode);

        info!(mode = ?mode, "Thermal mode selector initialized");

        Ok(mode)
    }

    /// Switch the hardware to `mode` and reflect it on success.
    ///
    /// Errors are returned untouched from the runner, which has already
    /// reported them to the user; nothing is changed in that case.
    #[instrument(skip(self))]
    pub async fn activate(&self, mode: ThermalMode, requires_secret: bool) -> CoreResult<Activation> {
        let sequence = {
            let mut state = self.state.lock().await;
            if state.detached {
                return Ok(Activation::Detached);
            }
            state.issue()
        };

        let request = CommandRequest::set_thermal_mode(mode).requiring_secret(requires_secret);
        self.runner.run(request).await?;

        let mut state = self.state.lock().await;
        let outcome = self.settle(&mut state, sequence, mode);

        if outcome == Activation::Applied {
            self.persist(mode);
            self.notifier.notify(&mode.change_notice());
        }

        Ok(outcome)
    }

    /// Read the active mode from the utility and reflect it without notifying.
    #[instrument(skip(self))]
    pub async fn synchronize(&self, requires_secret: bool) -> CoreResult<Option<ThermalMode>> {
        let sequence = {
            let mut state = self.state.lock().await;
            if state.detached {
                return Ok(None);
            }
            state.issue()
        };

        let request = CommandRequest::query_thermal_mode().requiring_secret(requires_secret);
        let result = self.runner.run(request).await?;

        let mode = ThermalMode::from_report(&result.stdout).ok_or_else(|| {
            ThermalError::UnrecognizedReport {
                report: result.stdout.clone(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let mut state = self.state.lock().await;
        if self.settle(&mut state, sequence, mode) != Activation::Applied {
            return Ok(None);
        }
        self.persist(mode);

        Ok(Some(mode))
    }

    /// Re-assert the markers for the current mode.
    ///
    /// Check items toggle themselves when clicked; this puts them back until
    /// the privileged command actually succeeds.
    pub async fn refresh_markers(&self) {
        let state = self.state.lock().await;
        if !state.detached {
            self.render_markers(state.current);
        }
    }

    /// The currently marked mode.
    pub async fn current(&self) -> Option<ThermalMode> {
        self.state.lock().await.current
    }

    /// Remove the entries. Requests still in flight complete silently.
    #[instrument(skip(self))]
    pub async fn teardown(&self) {
        let mut state = self.state.lock().await;
        if state.detached {
            return;
        }
        state.detached = true;
        self.host.remove_entries();

        info!("Thermal mode selector torn down");
    }

    fn settle(&self, state: &mut SelectorState, sequence: u64, mode: ThermalMode) -> Activation {
        if state.detached {
            debug!(sequence, "Dropping result for detached selector");
            return Activation::Detached;
        }

        if sequence < state.applied {
            info!(
                sequence,
                applied = state.applied,
                mode = mode.setting_key(),
                "Dropping result superseded by a newer request"
            );
            return Activation::Superseded;
        }

        state.applied = sequence;
        state.current = Some(mode);
        self.render_markers(Some(mode));

        info!(mode = mode.setting_key(), "Changed Dell Thermal Management mode");

        Activation::Applied
    }

    fn render_markers(&self, selected: Option<ThermalMode>) {
        for mode in ThermalMode::ALL {
            self.host.set_marker(mode, false);
        }
        if let Some(mode) = selected {
            self.host.set_marker(mode, true);
        }
    }

    fn persist(&self, mode: ThermalMode) {
        if let Err(e) = self.settings.store_mode(mode.setting_key()) {
            error!(
                error = ?e,
                mode = mode.setting_key(),
                "Failed to persist thermal mode, saved setting no longer matches the menu"
            );
        }
    }
}
