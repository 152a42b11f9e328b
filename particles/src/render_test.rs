use super::*;

#[test]
fn fill_style_uses_accent_hue() {
    assert_eq!(fill_style(0.5), "rgba(20, 157, 221, 0.5)");
}

#[test]
fn fill_style_keeps_fractional_opacity() {
    assert_eq!(fill_style(0.25), "rgba(20, 157, 221, 0.25)");
}
