mod launcher;
mod request;
mod result;
mod runner;

pub use {
    launcher::{ProcessLauncher, TokioLauncher},
    request::CommandRequest,
    result::CommandResult,
    runner::{
        CommandRunner, DEFAULT_CCTK_PATH, DEFAULT_ELEVATION_HELPER, DEFAULT_TARGET_USER,
        PrivilegedRunner, RunnerConfig, SETUP_PASSWORD_LABEL,
    },
};
