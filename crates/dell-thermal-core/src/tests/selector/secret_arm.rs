use crate::{SecretArm, SecretDemand};

use std::sync::Arc;

/// WHAT: Taking an armed switch clears it
/// WHY: The password prompt applies to the next request only
#[test]
fn given_armed_switch_when_taken_twice_then_only_first_take_is_armed() {
    // Given: An armed switch
    let arm = SecretArm::new();
    arm.arm();

    // When: Taking it twice
    let first = arm.take();
    let second = arm.take();

    // Then: Only the first take sees it armed
    assert!(first);
    assert!(!second);
    assert!(!arm.is_armed());
}

/// WHAT: Toggle flips and reports the new state
/// WHY: The tray check item mirrors the switch
#[test]
fn given_switch_when_toggled_then_reports_new_state() {
    // Given: A disarmed switch
    let arm = SecretArm::new();

    // When/Then: Toggling alternates
    assert!(arm.toggle());
    assert!(arm.is_armed());
    assert!(!arm.toggle());
    assert!(!arm.is_armed());
}

/// WHAT: Concurrent takes consume the switch exactly once
/// WHY: Overlapping requests must not both prompt for the password
#[test]
#[allow(clippy::unwrap_used)]
fn given_armed_switch_when_taken_concurrently_then_exactly_one_wins() {
    // Given: An armed switch shared across threads
    let arm = Arc::new(SecretArm::new());
    arm.arm();

    // When: Eight threads race to take it
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let arm = Arc::clone(&arm);
            std::thread::spawn(move || arm.take())
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|taken| *taken)
        .count();

    // Then: Exactly one thread observed it armed
    assert_eq!(winners, 1);
}

/// WHAT: An armed switch prompts for exactly one request
/// WHY: The menu entry asks for the password on the next change only
#[test]
fn given_armed_switch_when_demanding_twice_then_only_first_prompts() {
    // Given: An armed switch and no global requirement
    let arm = SecretArm::new();
    arm.arm();

    // When: Two requests ask for their password requirement
    let first = arm.demand(false);
    let second = arm.demand(false);

    // Then: The first prompts and reports the switch as consumed
    assert_eq!(
        first,
        SecretDemand {
            prompt: true,
            consumed: true
        }
    );
    assert_eq!(
        second,
        SecretDemand {
            prompt: false,
            consumed: false
        }
    );
}

/// WHAT: The always-prompt setting prompts on every request
/// WHY: Machines with a BIOS setup password reject every unauthenticated change
#[test]
fn given_always_prompt_when_demanding_repeatedly_then_every_request_prompts() {
    // Given: A disarmed switch
    let arm = SecretArm::new();

    // When/Then: Every request prompts without touching the switch
    for _ in 0..3 {
        assert_eq!(
            arm.demand(true),
            SecretDemand {
                prompt: true,
                consumed: false
            }
        );
    }
}

/// WHAT: An armed switch is still consumed when prompting is forced
/// WHY: The check entry must be cleared after the request it was meant for
#[test]
fn given_armed_switch_and_always_prompt_when_demanding_then_switch_consumed() {
    // Given: An armed switch
    let arm = SecretArm::new();
    arm.arm();

    // When: A request demands with the global requirement on
    let demand = arm.demand(true);

    // Then: It prompts, reports the consumption and leaves the switch clear
    assert!(demand.prompt);
    assert!(demand.consumed);
    assert!(!arm.is_armed());
}
