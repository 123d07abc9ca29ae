use crate::ThermalMode;

/// WHAT: Every mode maps to the exact vendor argument
/// WHY: The utility rejects anything but its own spelling
#[test]
fn given_each_mode_when_building_cli_argument_then_matches_vendor_flag() {
    // Given/When: The CLI argument for every mode
    let arguments: Vec<String> = ThermalMode::ALL
        .into_iter()
        .map(ThermalMode::cli_argument)
        .collect();

    // Then: Flags use the vendor's CamelCase values
    assert_eq!(
        arguments,
        vec![
            "--ThermalManagement=Optimized",
            "--ThermalManagement=Quiet",
            "--ThermalManagement=Cool",
            "--ThermalManagement=UltraPerformance",
        ]
    );
}

/// WHAT: Setting keys resolve back to their mode
/// WHY: Startup marks the entry named by the persisted key
#[test]
fn given_setting_key_when_parsing_then_returns_matching_mode() {
    // Given/When/Then: Each persisted key parses to its mode
    for mode in ThermalMode::ALL {
        assert_eq!(ThermalMode::from_setting_key(mode.setting_key()), Some(mode));
    }
    assert_eq!(
        ThermalMode::from_setting_key("ultraPerformance"),
        Some(ThermalMode::UltraPerformance)
    );
}

/// WHAT: Unknown or differently cased keys are rejected
/// WHY: An unrecognized setting must leave every entry unmarked
#[test]
fn given_unknown_setting_key_when_parsing_then_returns_none() {
    // Given: Keys that are not exact setting identifiers
    let keys = ["", "Quiet", "ULTRAPERFORMANCE", "turbo"];

    // When/Then: None of them parse
    for key in keys {
        assert_eq!(ThermalMode::from_setting_key(key), None, "key {key:?}");
    }
}

/// WHAT: Notification text uses the display name
/// WHY: Users see "Ultra Performance", not the CLI spelling
#[test]
fn given_ultra_performance_when_building_notice_then_uses_display_name() {
    // Given: Ultra Performance mode
    let mode = ThermalMode::UltraPerformance;

    // When: Building the change notice
    let notice = mode.change_notice();

    // Then: Message names the human-readable mode
    assert_eq!(notice, "Dell Thermal Mode changed to Ultra Performance");
}

/// WHAT: The query report is parsed from the last matching line
/// WHY: The utility may print banners before the value
#[test]
fn given_cctk_report_when_parsing_then_extracts_mode() {
    // Given: A report with noise and trailing whitespace
    let report = "Dell Command | Configure\n  ThermalManagement=Cool  \n";

    // When: Parsing the report
    let mode = ThermalMode::from_report(report);

    // Then: The reported mode is found
    assert_eq!(mode, Some(ThermalMode::Cool));
}

/// WHAT: Reports without a known value yield nothing
/// WHY: An unexpected report must not be mistaken for a mode
#[test]
fn given_report_without_known_mode_when_parsing_then_returns_none() {
    // Given: Reports lacking a recognized value
    let reports = ["", "ThermalManagement=", "ThermalManagement=Turbo", "error"];

    // When/Then: Nothing parses
    for report in reports {
        assert_eq!(ThermalMode::from_report(report), None, "report {report:?}");
    }
}
