use std::sync::atomic::{AtomicBool, Ordering};

/// Password requirement for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretDemand {
    /// The request must collect the BIOS setup password.
    pub prompt: bool,
    /// The switch was armed and is now cleared.
    pub consumed: bool,
}

/// One-shot switch asking for the BIOS setup password on the next request.
///
/// The flag is consumed with a single atomic swap, so of two overlapping
/// requests only one can observe it as armed.
#[derive(Debug, Default)]
pub struct SecretArm {
    armed: AtomicBool,
}

impl SecretArm {
    /// Create a disarmed switch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a password prompt for the next command.
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&self) -> bool {
        !self.armed.fetch_xor(true, Ordering::SeqCst)
    }

    /// Whether the next request will prompt.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Consume the switch, returning whether it was armed.
    pub fn take(&self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }

    /// Decide whether the next request prompts, consuming the switch.
    ///
    /// `always_prompt` forces a prompt regardless of the switch. The switch
    /// is consumed either way so it never leaks into a later request.
    pub fn demand(&self, always_prompt: bool) -> SecretDemand {
        let consumed = self.take();
        SecretDemand {
            prompt: consumed || always_prompt,
            consumed,
        }
    }
}
