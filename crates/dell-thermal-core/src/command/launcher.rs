use crate::CommandResult;

use std::{future::Future, process::Stdio};

use tokio::process::Command;
use tracing::{debug, instrument};

/// Starts an external process and collects its output.
pub trait ProcessLauncher: Send + Sync {
    /// Run `argv[0]` with the remaining arguments to completion.
    ///
    /// Spawn failures surface as `Err`; a process that starts and exits
    /// non-zero is an `Ok` result with `success == false`.
    fn launch(&self, argv: &[String]) -> impl Future<Output = std::io::Result<CommandResult>> + Send;
}

/// [`ProcessLauncher`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLauncher;

impl ProcessLauncher for TokioLauncher {
    #[instrument(skip_all, fields(program = argv.first().map(String::as_str)))]
    async fn launch(&self, argv: &[String]) -> std::io::Result<CommandResult> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line")
        })?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(false)
            .output()
            .await?;

        let result = CommandResult::from_output(&output);
        debug!(
            exit_code = ?result.exit_code,
            stdout_len = result.stdout.len(),
            stderr_len = result.stderr.len(),
            "Process finished"
        );

        Ok(result)
    }
}

impl<T: ProcessLauncher> ProcessLauncher for std::sync::Arc<T> {
    fn launch(&self, argv: &[String]) -> impl Future<Output = std::io::Result<CommandResult>> + Send {
        (**self).launch(argv)
    }
}
