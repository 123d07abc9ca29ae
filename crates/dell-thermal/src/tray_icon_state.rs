/// Tray icon states corresponding to application workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// No privileged command running.
    Idle,
    /// At least one privileged command is in flight.
    Busy,
}
