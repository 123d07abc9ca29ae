mod mode_selector;
mod secret_arm;

pub use {
    mode_selector::{Activation, ModeSelector},
    secret_arm::{SecretArm, SecretDemand},
};
