#![allow(clippy::unwrap_used)]

use crate::{
    CommandRequest, CommandRunner, PrivilegedRunner, ProcessLauncher, RunnerConfig, ThermalError,
    ThermalMode, TokioLauncher,
    tests::fakes::{FakePrompt, FakeViewer},
};

use std::sync::Arc;

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

/// WHAT: A zero exit status is reported as success with stdout captured
/// WHY: Success of a privileged command is decided by its exit status
#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn given_zero_exit_when_launching_then_success_with_output() {
    // Given: A shell that prints and exits cleanly
    let command = argv(&["sh", "-c", "echo ThermalManagement=Quiet"]);

    // When: Launching it
    let result = TokioLauncher.launch(&command).await.unwrap();

    // Then: Success with the printed line
    assert!(result.success);
    assert_eq!(result.exit_code, Some(0));
    assert_eq!(result.stdout, "ThermalManagement=Quiet\n");
    assert!(result.stderr.is_empty());
}

/// WHAT: A non-zero exit is a failure with both streams captured
/// WHY: stdout is shown to the user and stderr is logged
#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn given_non_zero_exit_when_launching_then_failure_with_both_streams() {
    // Given: A shell writing to both streams and exiting with 3
    let command = argv(&["sh", "-c", "echo out; echo err >&2; exit 3"]);

    // When: Launching it
    let result = TokioLauncher.launch(&command).await.unwrap();

    // Then: Failure with exit code and output kept apart
    assert!(!result.success);
    assert_eq!(result.exit_code, Some(3));
    assert_eq!(result.stdout, "out\n");
    assert_eq!(result.stderr, "err\n");
}

/// WHAT: A missing program is a spawn error, not a failed result
/// WHY: There is no output to show when nothing ran
#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn given_missing_program_when_launching_then_not_found_error() {
    // Given: A program that does not exist
    let command = argv(&["/nonexistent/pkexec", "--user", "root"]);

    // When: Launching it
    let result = TokioLauncher.launch(&command).await;

    // Then: The spawn fails with NotFound
    assert_eq!(
        result.map_err(|e| e.kind()).err(),
        Some(std::io::ErrorKind::NotFound)
    );
}

/// WHAT: A runner whose elevation helper is missing reports LaunchFailed
/// WHY: A missing pkexec must surface without opening the output viewer
#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
async fn given_missing_helper_when_running_then_launch_failed() {
    // Given: A real launcher pointed at a helper that does not exist
    let viewer = Arc::new(FakeViewer::default());
    let runner = PrivilegedRunner::new(
        RunnerConfig {
            elevation_helper: "/nonexistent/pkexec".to_string(),
            ..RunnerConfig::default()
        },
        TokioLauncher,
        FakePrompt::default(),
        Arc::clone(&viewer),
    );

    // When: Running a mode change
    let result = runner
        .run(CommandRequest::set_thermal_mode(ThermalMode::Cool))
        .await;

    // Then: LaunchFailed names the helper and nothing is shown
    assert!(matches!(
        &result,
        Err(ThermalError::LaunchFailed { program, .. }) if program == "/nonexistent/pkexec"
    ));
    assert!(viewer.shown().is_empty());
}
