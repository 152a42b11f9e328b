use super::*;

#[test]
fn progress_width_uses_percent() {
    assert_eq!(progress_width(Some("75")).as_deref(), Some("75%"));
}

#[test]
fn progress_width_keeps_fractions() {
    assert_eq!(progress_width(Some("42.5")).as_deref(), Some("42.5%"));
}

#[test]
fn progress_width_clamps_out_of_range() {
    assert_eq!(progress_width(Some("140")).as_deref(), Some("100%"));
    assert_eq!(progress_width(Some("-3")).as_deref(), Some("0%"));
}

#[test]
fn progress_width_trims_whitespace() {
    assert_eq!(progress_width(Some(" 90 ")).as_deref(), Some("90%"));
}

#[test]
fn progress_width_ignores_missing_or_garbage() {
    assert_eq!(progress_width(None), None);
    assert_eq!(progress_width(Some("")), None);
    assert_eq!(progress_width(Some("lots")), None);
    assert_eq!(progress_width(Some("NaN")), None);
    assert_eq!(progress_width(Some("inf")), None);
}

#[test]
fn pulse_is_short() {
    assert_eq!(CLICK_PULSE_MS, 300);
}
