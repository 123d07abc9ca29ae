use crate::thermal::{THERMAL_MANAGEMENT_FLAG, ThermalMode};

use std::fmt;

/// Argument name carrying the BIOS setup password.
const SETUP_PASSWORD_FLAG: &str = "--ValSetupPwd";

/// One invocation of the vendor utility.
///
/// Built per user action and dropped once the process completes. The
/// captured secret is appended as the final argument and never shows up in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct CommandRequest {
    args: Vec<String>,
    requires_secret: bool,
    secret: Option<String>,
}

impl CommandRequest {
    /// Create a request from raw utility arguments.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            requires_secret: false,
            secret: None,
        }
    }

    /// Request that switches the thermal mode.
    pub fn set_thermal_mode(mode: ThermalMode) -> Self {
        Self::new([mode.cli_argument()])
    }

    /// Request that reports the active thermal mode.
    pub fn query_thermal_mode() -> Self {
        Self::new([THERMAL_MANAGEMENT_FLAG])
    }

    /// Mark whether the BIOS setup password must be collected first.
    pub fn requiring_secret(mut self, requires_secret: bool) -> Self {
        self.requires_secret = requires_secret;
        self
    }

    /// Whether the runner must prompt for the BIOS setup password.
    pub fn requires_secret(&self) -> bool {
        self.requires_secret
    }

    /// Attach the captured BIOS setup password.
    pub fn set_secret(&mut self, secret: String) {
        self.secret = Some(secret);
    }

    /// Whether a secret has been captured.
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Arguments as given, without the secret.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argument list handed to the utility, secret last.
    pub fn arguments(&self) -> Vec<String> {
        let mut arguments = self.args.clone();
        if let Some(secret) = &self.secret {
            arguments.push(format!("{}={}", SETUP_PASSWORD_FLAG, secret));
        }
        arguments
    }
}

impl fmt::Debug for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRequest")
            .field("args", &self.args)
            .field("requires_secret", &self.requires_secret)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
