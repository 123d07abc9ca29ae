//! Privileged execution of the vendor utility.
//!
//! Every request is wrapped as `<helper> --user <user> <binary> <args...>`,
//! optionally preceded by a BIOS setup password prompt. Failures are reported
//! to the user here so callers only need to act on success.

use crate::{
    CommandRequest, CommandResult, CoreResult, ThermalError,
    command::ProcessLauncher,
    host::{OutputViewer, SecretPrompt},
};

use std::{future::Future, panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};

/// Default elevation helper.
pub const DEFAULT_ELEVATION_HELPER: &str = "pkexec";

/// Default account the utility runs as.
pub const DEFAULT_TARGET_USER: &str = "root";

/// Default install location of the Dell Command | Configure CLI.
pub const DEFAULT_CCTK_PATH: &str = "/opt/dell/dcc/cctk";

/// Label shown in the BIOS setup password prompt.
pub const SETUP_PASSWORD_LABEL: &str = "Enter your BIOS Setup Password:";

/// Executes [`CommandRequest`]s and reports their outcome.
pub trait CommandRunner: Send + Sync {
    /// Run `request` to completion.
    ///
    /// Resolves to `Ok` only when the utility exited successfully.
    fn run(&self, request: CommandRequest) -> impl Future<Output = CoreResult<CommandResult>> + Send;
}

/// How the utility is elevated and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Elevation helper program, e.g. `pkexec`.
    pub elevation_helper: String,
    /// User the helper switches to.
    pub target_user: String,
    /// Path to the vendor utility.
    pub binary_path: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            elevation_helper: DEFAULT_ELEVATION_HELPER.to_string(),
            target_user: DEFAULT_TARGET_USER.to_string(),
            binary_path: PathBuf::from(DEFAULT_CCTK_PATH),
        }
    }
}

/// Runs the vendor utility through the elevation helper.
pub struct PrivilegedRunner<L, P, V> {
    config: RunnerConfig,
    launcher: L,
    prompt: P,
    viewer: V,
}

impl<L, P, V> PrivilegedRunner<L, P, V>
where
    L: ProcessLauncher,
    P: SecretPrompt,
    V: OutputViewer,
{
    /// Create a runner from its configuration and collaborators.
    pub fn new(config: RunnerConfig, launcher: L, prompt: P, viewer: V) -> Self {
        Self {
            config,
            launcher,
            prompt,
            viewer,
        }
    }

    /// Runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Full command line for `request`, elevation helper first.
    pub fn argv(&self, request: &CommandRequest) -> Vec<String> {
        let mut argv = vec![
            self.config.elevation_helper.clone(),
            "--user".to_string(),
            self.config.target_user.clone(),
            self.config.binary_path.to_string_lossy().into_owned(),
        ];
        argv.extend(request.arguments());
        argv
    }

    async fn collect_secret(&self, request: &mut CommandRequest) -> CoreResult<()> {
        let location = ErrorLocation::from(Location::caller());

        match self.prompt.prompt(SETUP_PASSWORD_LABEL).await {
            Some(secret) if !secret.is_empty() => {
                request.set_secret(secret);
                Ok(())
            }
            Some(_) => {
                warn!("Empty BIOS setup password submitted, aborting request");
                Err(ThermalError::SecretPromptCancelled { location })
            }
            None => {
                info!("BIOS setup password prompt dismissed, aborting request");
                Err(ThermalError::SecretPromptCancelled { location })
            }
        }
    }
}

impl<L, P, V> CommandRunner for PrivilegedRunner<L, P, V>
where
    L: ProcessLauncher,
    P: SecretPrompt,
    V: OutputViewer,
{
    #[instrument(skip(self))]
    async fn run(&self, mut request: CommandRequest) -> CoreResult<CommandResult> {
        if request.requires_secret() {
            self.collect_secret(&mut request).await?;
        }

        let argv = self.argv(&request);

        let result = match self.launcher.launch(&argv).await {
            Ok(result) => result,
            Err(source) => {
                let program = self.config.elevation_helper.clone();
                error!(program = %program, error = %source, "Failed to launch privileged command");
                return Err(ThermalError::LaunchFailed {
                    program,
                    source,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        if !result.success {
            if !result.stdout.is_empty() {
                self.viewer.show_output(&result.stdout);
            }

            error!(
                exit_code = ?result.exit_code,
                stderr = %result.stderr.trim_end(),
                "Privileged command failed"
            );

            return Err(ThermalError::ExecutionFailed {
                exit_code: result.exit_code,
                stderr: result.stderr,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(args = ?request.args(), "Privileged command succeeded");

        Ok(result)
    }
}

impl<T: CommandRunner> CommandRunner for std::sync::Arc<T> {
    fn run(&self, request: CommandRequest) -> impl Future<Output = CoreResult<CommandResult>> + Send {
        (**self).run(request)
    }
}
