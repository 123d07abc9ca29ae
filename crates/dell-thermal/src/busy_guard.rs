use crate::{TrayCommand, TrayIconState, TrayProxy};

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

/// Receives busy indicator transitions.
pub trait BusySink: Send + Sync {
    /// Show `state` on the tray.
    fn show(&self, state: TrayIconState);
}

impl BusySink for TrayProxy {
    fn show(&self, state: TrayIconState) {
        if let Err(e) = self.send(TrayCommand::SetState(state)) {
            warn!(error = ?e, state = ?state, "Failed to update tray busy state");
        }
    }
}

/// Counts privileged commands in flight and drives the busy indicator.
///
/// Transitions are sent while the count is locked, so Busy and Idle reach
/// the tray in the order the count changed.
pub struct BusyTracker<S: BusySink = TrayProxy> {
    in_flight: Mutex<usize>,
    sink: S,
}

impl<S: BusySink> BusyTracker<S> {
    /// Start idle, reporting transitions to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            in_flight: Mutex::new(0),
            sink,
        }
    }

    fn count(&self) -> MutexGuard<'_, usize> {
        // The count stays consistent even if a holder panicked.
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// RAII guard that keeps the tray icon busy while a privileged command runs.
///
/// The first guard switches the icon to [`TrayIconState::Busy`]; dropping the
/// last one switches it back to [`TrayIconState::Idle`], even if the task
/// holding it returns early.
pub struct BusyGuard<S: BusySink = TrayProxy> {
    tracker: Arc<BusyTracker<S>>,
}

impl<S: BusySink> BusyGuard<S> {
    /// Register one more in-flight command.
    pub fn new(tracker: Arc<BusyTracker<S>>) -> Self {
        {
            let mut count = tracker.count();
            *count += 1;
            if *count == 1 {
                tracker.sink.show(TrayIconState::Busy);
            }
        }
        Self { tracker }
    }
}

impl<S: BusySink> Drop for BusyGuard<S> {
    fn drop(&mut self) {
        let mut count = self.tracker.count();
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.tracker.sink.show(TrayIconState::Idle);
        }
    }
}
