use crate::{AppError, AppResult, config::project_dirs};

use std::{fs, panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "dell_thermal=debug,dell_thermal_core=debug";

/// Log to stderr and to a daily rolling file in the data directory.
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive for the lifetime of the process.
#[track_caller]
pub fn init() -> AppResult<WorkerGuard> {
    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("dell-thermal")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| AppError::LoggingError {
            reason: format!("Failed to create log file in {:?}: {}", log_dir, e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| AppError::LoggingError {
            reason: format!("Failed to install subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(guard)
}

#[track_caller]
fn log_dir() -> AppResult<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("logs"))
}
