#![allow(clippy::unwrap_used, clippy::panic)]

use crate::{
    CommandRequest, CommandRunner, PrivilegedRunner, RunnerConfig, SETUP_PASSWORD_LABEL,
    SecretArm, ThermalError, ThermalMode,
    tests::fakes::{FakeLauncher, FakePrompt, FakeViewer, failure, success},
};

use std::sync::Arc;

type TestRunner = PrivilegedRunner<Arc<FakeLauncher>, Arc<FakePrompt>, Arc<FakeViewer>>;

fn runner(
    launcher: FakeLauncher,
    prompt: FakePrompt,
) -> (TestRunner, Arc<FakeLauncher>, Arc<FakePrompt>, Arc<FakeViewer>) {
    let launcher = Arc::new(launcher);
    let prompt = Arc::new(prompt);
    let viewer = Arc::new(FakeViewer::default());
    let runner = PrivilegedRunner::new(
        RunnerConfig::default(),
        Arc::clone(&launcher),
        Arc::clone(&prompt),
        Arc::clone(&viewer),
    );
    (runner, launcher, prompt, viewer)
}

/// WHAT: The command line is elevated to root and targets cctk
/// WHY: The utility only works with root privileges
#[tokio::test]
async fn given_mode_request_when_running_then_elevates_cctk_as_root() {
    // Given: A runner with default configuration
    let (runner, launcher, prompt, viewer) = runner(FakeLauncher::default(), FakePrompt::default());

    // When: Running a mode change
    let result = runner
        .run(CommandRequest::set_thermal_mode(ThermalMode::Cool))
        .await;

    // Then: pkexec runs cctk as root with the mode flag and nothing else
    assert!(result.is_ok());
    assert_eq!(
        launcher.calls(),
        vec![vec![
            "pkexec".to_string(),
            "--user".to_string(),
            "root".to_string(),
            "/opt/dell/dcc/cctk".to_string(),
            "--ThermalManagement=Cool".to_string(),
        ]]
    );
    assert_eq!(prompt.opened(), 0);
    assert!(viewer.shown().is_empty());
}

/// WHAT: A failed command shows its stdout verbatim and is not a success
/// WHY: The utility explains BIOS refusals on stdout
#[tokio::test]
async fn given_failure_with_stdout_when_running_then_output_shown_and_error_returned() {
    // Given: A process that exits non-zero printing "ERR: locked"
    let (runner, _launcher, _prompt, viewer) = runner(
        FakeLauncher::replying(Ok(failure("ERR: locked", "permission denied"))),
        FakePrompt::default(),
    );

    // When: Running a mode change
    let result = runner
        .run(CommandRequest::set_thermal_mode(ThermalMode::Quiet))
        .await;

    // Then: Exactly the stdout is shown and the stderr is in the error
    assert_eq!(viewer.shown(), vec!["ERR: locked".to_string()]);
    match result {
        Err(ThermalError::ExecutionFailed { stderr, exit_code, .. }) => {
            assert_eq!(stderr, "permission denied");
            assert_eq!(exit_code, Some(1));
        }
        other => panic!("expected ExecutionFailed, got {:?}", other),
    }
}

/// WHAT: A failure with empty stdout opens no output dialog
/// WHY: An empty dialog carries no information for the user
#[tokio::test]
async fn given_failure_without_stdout_when_running_then_no_output_shown() {
    // Given: A process that fails silently on stdout
    let (runner, _launcher, _prompt, viewer) = runner(
        FakeLauncher::replying(Ok(failure("", "Not authorized"))),
        FakePrompt::default(),
    );

    // When: Running a mode change
    let result = runner
        .run(CommandRequest::set_thermal_mode(ThermalMode::Quiet))
        .await;

    // Then: Error is returned without any dialog
    assert!(matches!(result, Err(ThermalError::ExecutionFailed { .. })));
    assert!(viewer.shown().is_empty());
}

/// WHAT: Launch failures are reported without UI
/// WHY: A missing pkexec or cctk is only logged
#[tokio::test]
async fn given_missing_helper_when_running_then_launch_failed_without_output() {
    // Given: A launcher that cannot spawn the helper
    let (runner, _launcher, _prompt, viewer) = runner(
        FakeLauncher::replying(Err(std::io::Error::from(std::io::ErrorKind::NotFound))),
        FakePrompt::default(),
    );

    // When: Running a mode change
    let result = runner
        .run(CommandRequest::set_thermal_mode(ThermalMode::Optimized))
        .await;

    // Then: LaunchFailed names the helper and nothing was shown
    match result {
        Err(ThermalError::LaunchFailed { program, .. }) => assert_eq!(program, "pkexec"),
        other => panic!("expected LaunchFailed, got {:?}", other),
    }
    assert!(viewer.shown().is_empty());
}

/// WHAT: A submitted password is appended and the prompt opens once
/// WHY: The BIOS setup password must reach cctk as the last argument
#[tokio::test]
async fn given_armed_secret_when_running_then_prompts_once_and_appends_password() {
    // Given: An armed secret switch and a prompt answering "hunter2"
    let arm = SecretArm::new();
    arm.arm();
    let (runner, launcher, prompt, _viewer) =
        runner(FakeLauncher::default(), FakePrompt::answering(Some("hunter2")));

    // When: Two requests are built from the switch in sequence
    let first = CommandRequest::set_thermal_mode(ThermalMode::Cool).requiring_secret(arm.take());
    runner.run(first).await.unwrap();
    let second_requires = arm.take();
    let second = CommandRequest::set_thermal_mode(ThermalMode::Quiet).requiring_secret(second_requires);
    runner.run(second).await.unwrap();

    // Then: One prompt, password on the first call only, switch cleared
    assert_eq!(prompt.opened(), 1);
    assert_eq!(
        *prompt.labels.lock().unwrap(),
        vec![SETUP_PASSWORD_LABEL.to_string()]
    );
    assert!(!second_requires);
    assert!(!arm.is_armed());

    let calls = launcher.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].last().map(String::as_str), Some("--ValSetupPwd=hunter2"));
    assert_eq!(calls[1].last().map(String::as_str), Some("--ThermalManagement=Quiet"));
}

/// WHAT: Cancelling the password prompt aborts the request
/// WHY: A command without the required password must never run
#[tokio::test]
async fn given_cancelled_prompt_when_running_then_command_not_executed() {
    // Given: A prompt that is dismissed
    let (runner, launcher, prompt, _viewer) =
        runner(FakeLauncher::default(), FakePrompt::answering(None));

    // When: Running a request that needs the password
    let request = CommandRequest::set_thermal_mode(ThermalMode::Cool).requiring_secret(true);
    let result = runner.run(request).await;

    // Then: Nothing was launched
    assert!(matches!(
        result,
        Err(ThermalError::SecretPromptCancelled { .. })
    ));
    assert_eq!(prompt.opened(), 1);
    assert!(launcher.calls().is_empty());
}

/// WHAT: An empty password submission is treated like cancel
/// WHY: `--ValSetupPwd=` with no value must never be sent
#[tokio::test]
async fn given_empty_password_when_running_then_command_not_executed() {
    // Given: A prompt that returns an empty string
    let (runner, launcher, _prompt, _viewer) =
        runner(FakeLauncher::default(), FakePrompt::answering(Some("")));

    // When: Running a request that needs the password
    let request = CommandRequest::set_thermal_mode(ThermalMode::Cool).requiring_secret(true);
    let result = runner.run(request).await;

    // Then: Request aborted before launch
    assert!(matches!(
        result,
        Err(ThermalError::SecretPromptCancelled { .. })
    ));
    assert!(launcher.calls().is_empty());
}

/// WHAT: A successful command returns its output untouched
/// WHY: The query feature parses stdout of successful runs
#[tokio::test]
async fn given_success_when_running_then_returns_result_without_dialog() {
    // Given: A process reporting the active mode
    let (runner, _launcher, _prompt, viewer) = runner(
        FakeLauncher::replying(Ok(success("ThermalManagement=Quiet\n"))),
        FakePrompt::default(),
    );

    // When: Querying the mode
    let result = runner.run(CommandRequest::query_thermal_mode()).await.unwrap();

    // Then: Output is passed through, nothing shown
    assert!(result.success);
    assert_eq!(result.stdout, "ThermalManagement=Quiet\n");
    assert!(viewer.shown().is_empty());
}
