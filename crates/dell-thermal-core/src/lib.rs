//! Dell thermal management core library.
//!
//! Switches the Dell Command | Configure thermal management preset through a
//! privilege elevation helper and keeps a four-entry mode menu in sync with
//! the last successful change. All UI surfaces are reached through the
//! traits in [`host`], so the logic runs the same against the system tray or
//! against test fakes.
//!
//! # Example
//!
//! ```no_run
//! use dell_thermal_core::{
//!     CommandRequest, CommandRunner, CoreResult, PrivilegedRunner, RunnerConfig, ThermalMode,
//!     TokioLauncher,
//!     host::{OutputViewer, SecretPrompt},
//! };
//!
//! struct NoPrompt;
//!
//! impl SecretPrompt for NoPrompt {
//!     async fn prompt(&self, _label: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! struct StderrViewer;
//!
//! impl OutputViewer for StderrViewer {
//!     fn show_output(&self, text: &str) {
//!         eprintln!("{text}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let runner = PrivilegedRunner::new(
//!         RunnerConfig::default(),
//!         TokioLauncher,
//!         NoPrompt,
//!         StderrViewer,
//!     );
//!
//!     runner
//!         .run(CommandRequest::set_thermal_mode(ThermalMode::Quiet))
//!         .await?;
//!
//!     println!("{}", ThermalMode::Quiet.change_notice());
//!     Ok(())
//! }
//! ```

mod command;
mod error;
pub mod host;
mod selector;
mod thermal;

pub use {
    command::{
        CommandRequest, CommandResult, CommandRunner, DEFAULT_CCTK_PATH, DEFAULT_ELEVATION_HELPER,
        DEFAULT_TARGET_USER, PrivilegedRunner, ProcessLauncher, RunnerConfig, SETUP_PASSWORD_LABEL,
        TokioLauncher,
    },
    error::{Result as CoreResult, ThermalError},
    selector::{Activation, ModeSelector, SecretArm, SecretDemand},
    thermal::ThermalMode,
};
