use error_location::ErrorLocation;
use thiserror::Error;

/// Thermal management errors with source location tracking.
#[derive(Error, Debug)]
pub enum ThermalError {
    /// The elevation helper or the vendor binary could not be started.
    #[error("Failed to launch {program}: {source} {location}")]
    LaunchFailed {
        /// Program that failed to start.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The privileged command ran but exited unsuccessfully.
    #[error("Command failed with exit code {exit_code:?}: {stderr} {location}")]
    ExecutionFailed {
        /// Exit code reported by the process, if any.
        exit_code: Option<i32>,
        /// Captured standard error text.
        stderr: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The user dismissed the BIOS setup password prompt.
    #[error("BIOS setup password prompt was cancelled {location}")]
    SecretPromptCancelled {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading or writing the persisted thermal mode failed.
    #[error("Settings error: {reason} {location}")]
    Settings {
        /// Description of the settings failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The utility reported a thermal mode this crate does not know.
    #[error("Unrecognized thermal mode report: {report:?} {location}")]
    UnrecognizedReport {
        /// Raw standard output of the query.
        report: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ThermalError`].
pub type Result<T> = std::result::Result<T, ThermalError>;
