//! Native modal dialogs.
//!
//! The BIOS setup password prompt and the failed-command output viewer are
//! shown through the desktop's dialog helpers. `zenity` is tried first, then
//! `kdialog`; a helper that is not installed is skipped.

use crate::{AppError, AppResult};

use std::{io::ErrorKind, panic::Location, process::Stdio};

use dell_thermal_core::host::{OutputViewer, SecretPrompt};
use error_location::ErrorLocation;
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, error, info, instrument, warn};

const DIALOG_TITLE: &str = "Dell Thermal Management";

/// A desktop dialog helper program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTool {
    /// GNOME's `zenity`.
    Zenity,
    /// KDE's `kdialog`.
    Kdialog,
}

impl DialogTool {
    /// Helpers in the order they are tried.
    pub const ALL: [DialogTool; 2] = [DialogTool::Zenity, DialogTool::Kdialog];

    /// Executable name.
    pub fn program(self) -> &'static str {
        match self {
            DialogTool::Zenity => "zenity",
            DialogTool::Kdialog => "kdialog",
        }
    }

    /// Arguments for a masked single-line prompt labelled `label`.
    pub fn password_args(self, label: &str) -> Vec<String> {
        match self {
            DialogTool::Zenity => vec![
                "--entry".to_string(),
                "--hide-text".to_string(),
                format!("--title={}", DIALOG_TITLE),
                format!("--text={}", label),
            ],
            DialogTool::Kdialog => vec![
                "--title".to_string(),
                DIALOG_TITLE.to_string(),
                "--password".to_string(),
                label.to_string(),
            ],
        }
    }

    /// Arguments for a read-only view of `text`.
    ///
    /// `zenity` reads the text from stdin; see [`reads_text_from_stdin`](Self::reads_text_from_stdin).
    pub fn output_args(self, text: &str) -> Vec<String> {
        match self {
            DialogTool::Zenity => vec![
                "--text-info".to_string(),
                format!("--title={}", DIALOG_TITLE),
                "--width=600".to_string(),
                "--height=400".to_string(),
            ],
            DialogTool::Kdialog => vec![
                "--title".to_string(),
                DIALOG_TITLE.to_string(),
                "--error".to_string(),
                text.to_string(),
            ],
        }
    }

    /// Whether the output view expects the text on stdin.
    pub fn reads_text_from_stdin(self) -> bool {
        matches!(self, DialogTool::Zenity)
    }
}

/// Strip the line terminator a dialog helper prints after the entered text.
pub fn entered_text(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

/// [`SecretPrompt`] and [`OutputViewer`] backed by native dialog helpers.
#[derive(Debug, Clone)]
pub struct DesktopDialogs {
    tools: Vec<DialogTool>,
}

impl Default for DesktopDialogs {
    fn default() -> Self {
        Self::new(DialogTool::ALL.to_vec())
    }
}

impl DesktopDialogs {
    /// Use `tools` in order of preference.
    pub fn new(tools: Vec<DialogTool>) -> Self {
        Self { tools }
    }
}

impl SecretPrompt for DesktopDialogs {
    #[instrument(skip(self))]
    async fn prompt(&self, label: &str) -> Option<String> {
        for tool in &self.tools {
            let output = Command::new(tool.program())
                .args(tool.password_args(label))
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .output()
                .await;

            match output {
                Ok(output) if output.status.success() => {
                    debug!(tool = tool.program(), "Password entered");
                    return Some(entered_text(&output.stdout));
                }
                Ok(output) => {
                    info!(tool = tool.program(), exit_code = ?output.status.code(), "Password prompt dismissed");
                    return None;
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(tool = tool.program(), "Dialog helper not installed, trying next");
                }
                Err(e) => {
                    error!(tool = tool.program(), error = %e, "Failed to open password prompt");
                    return None;
                }
            }
        }

        error!("No dialog helper available for the BIOS setup password prompt");
        None
    }
}

impl OutputViewer for DesktopDialogs {
    fn show_output(&self, text: &str) {
        let tools = self.tools.clone();
        let text = text.to_string();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = show_text(&tools, &text).await {
                        warn!(error = ?e, "Failed to show command output");
                    }
                });
            }
            Err(_) => warn!("No async runtime available to show command output"),
        }
    }
}

/// Show `text` with the first available helper and wait for dismissal.
#[instrument(skip_all)]
async fn show_text(tools: &[DialogTool], text: &str) -> AppResult<()> {
    for tool in tools {
        let stdin = if tool.reads_text_from_stdin() {
            Stdio::piped()
        } else {
            Stdio::null()
        };

        let mut child = match Command::new(tool.program())
            .args(tool.output_args(text))
            .stdin(stdin)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(tool = tool.program(), "Dialog helper not installed, trying next");
                continue;
            }
            Err(e) => {
                return Err(AppError::DialogError {
                    reason: format!("Failed to start {}: {}", tool.program(), e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // Closing stdin tells zenity the text is complete.
            drop(stdin);
        }

        child.wait().await?;
        debug!(tool = tool.program(), "Command output dismissed");

        return Ok(());
    }

    Err(AppError::DialogError {
        reason: "No dialog helper available to show command output".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
