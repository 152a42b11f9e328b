use super::*;

#[test]
fn dom_ready_waits_while_loading() {
    assert!(!Phase::DomReady.reached("loading"));
}

#[test]
fn dom_ready_reached_once_interactive() {
    assert!(Phase::DomReady.reached("interactive"));
    assert!(Phase::DomReady.reached("complete"));
}

#[test]
fn loaded_requires_complete() {
    assert!(!Phase::Loaded.reached("loading"));
    assert!(!Phase::Loaded.reached("interactive"));
    assert!(Phase::Loaded.reached("complete"));
}

#[test]
fn unknown_ready_state_reaches_nothing() {
    assert!(!Phase::DomReady.reached(""));
    assert!(!Phase::Loaded.reached("unloaded"));
}
