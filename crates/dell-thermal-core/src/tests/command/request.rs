use crate::{CommandRequest, ThermalMode};

/// WHAT: A captured secret is appended as the final argument
/// WHY: The utility expects the setup password after the setting
#[test]
fn given_secret_when_building_arguments_then_appended_last() {
    // Given: A thermal request with a captured secret
    let mut request = CommandRequest::set_thermal_mode(ThermalMode::Quiet).requiring_secret(true);
    request.set_secret("hunter2".to_string());

    // When: Building the argument list
    let arguments = request.arguments();

    // Then: Secret flag follows the mode flag
    assert_eq!(
        arguments,
        vec!["--ThermalManagement=Quiet", "--ValSetupPwd=hunter2"]
    );
    assert!(request.requires_secret());
}

/// WHAT: Without a secret no password flag is emitted
/// WHY: An empty `--ValSetupPwd=` would be sent to the BIOS otherwise
#[test]
fn given_no_secret_when_building_arguments_then_no_password_flag() {
    // Given: A request that never captured a secret
    let request = CommandRequest::query_thermal_mode();

    // When: Building the argument list
    let arguments = request.arguments();

    // Then: Only the query flag is present
    assert_eq!(arguments, vec!["--ThermalManagement"]);
    assert!(!request.has_secret());
}

/// WHAT: Debug output never contains the secret
/// WHY: Requests are logged through `#[instrument]`
#[test]
fn given_secret_when_formatting_debug_then_redacted() {
    // Given: A request holding a secret
    let mut request = CommandRequest::set_thermal_mode(ThermalMode::Cool);
    request.set_secret("hunter2".to_string());

    // When: Formatting with Debug
    let formatted = format!("{:?}", request);

    // Then: The secret is masked
    assert!(!formatted.contains("hunter2"));
    assert!(formatted.contains("<redacted>"));
}
