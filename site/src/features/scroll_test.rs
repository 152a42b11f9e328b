use super::*;

#[test]
fn anchor_with_id_targets_that_id() {
    assert_eq!(anchor_target_id("#about"), Some("about"));
    assert_eq!(anchor_target_id("#portfolio"), Some("portfolio"));
}

#[test]
fn bare_hash_targets_nothing() {
    assert_eq!(anchor_target_id("#"), None);
}

#[test]
fn non_fragment_href_targets_nothing() {
    assert_eq!(anchor_target_id("/resume.pdf"), None);
    assert_eq!(anchor_target_id(""), None);
}

#[test]
fn back_to_top_hidden_at_threshold() {
    assert!(!back_to_top_active(0.0, 100.0));
    assert!(!back_to_top_active(100.0, 100.0));
}

#[test]
fn back_to_top_shown_past_threshold() {
    assert!(back_to_top_active(100.5, 100.0));
    assert!(back_to_top_active(2400.0, 100.0));
}

#[test]
fn anchor_selector_excludes_back_to_top() {
    assert!(ANCHOR_SELECTOR.contains(":not(.back-to-top)"));
}
