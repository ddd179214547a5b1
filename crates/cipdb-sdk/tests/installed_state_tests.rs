//! Integration tests for a process-wide facade installed on its own switch
//!
//! Runs as a separate test binary so the installed facade does not leak into
//! the other process-wide tests.

mod common;

use cipdb_sdk::{Breakpoints, Decision, GlobalState};
use common::{clear_gate_env, serial, RecordingDebugger};

#[test]
fn test_free_switch_controls_installed_private_state() {
    let _guard = serial();
    clear_gate_env();

    let state = GlobalState::new();
    let debugger = RecordingDebugger::new();
    let installed = cipdb_sdk::install(
        Breakpoints::builder()
            .with_state(state.clone())
            .with_debugger(debugger.clone())
            .build(),
    );
    assert!(installed);

    cipdb_sdk::disable();
    assert!(!cipdb_sdk::is_enabled());
    assert!(!state.is_enabled());

    assert_eq!(cipdb_sdk::set_trace(true, None).unwrap(), Decision::Skip);
    assert_eq!(cipdb_sdk::set_trace(true, Some("save")).unwrap(), Decision::Skip);
    let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    assert_eq!(
        cipdb_sdk::post_mortem(&error, true, None).unwrap(),
        Decision::Skip
    );
    assert_eq!(debugger.count(), 0);

    cipdb_sdk::enable();
    assert!(state.is_enabled());
    assert_eq!(cipdb_sdk::set_trace(true, None).unwrap(), Decision::Trigger);
    assert_eq!(debugger.count(), 1);
}
