use super::*;

#[test]
fn filter_selector_defaults_to_star() {
    assert_eq!(filter_control_selector(None), r#"[data-filter="*"]"#);
    assert_eq!(filter_control_selector(Some("  ")), r#"[data-filter="*"]"#);
}

#[test]
fn filter_selector_uses_given_filter() {
    assert_eq!(filter_control_selector(Some(".filter-web")), r#"[data-filter=".filter-web"]"#);
}

#[test]
fn gallery_report_lists_every_probe() {
    let report = GalleryReport {
        plugin_loaded: true,
        plugin_bound: false,
        container_present: true,
        filter_count: 4,
        item_count: 9,
    };
    assert_eq!(
        report.lines(),
        vec![
            "Isotope available: true",
            "Isotope bound to container: false",
            "Portfolio container: found",
            "Portfolio filters: 4",
            "Portfolio items: 9",
        ]
    );
}

#[test]
fn gallery_report_flags_missing_container() {
    let report = GalleryReport::default();
    assert!(report.lines().contains(&"Portfolio container: missing".to_owned()));
}

#[test]
fn back_to_top_report_without_button_is_one_line() {
    assert_eq!(BackToTopReport::default().lines(), vec!["Button found: false"]);
}

#[test]
fn back_to_top_report_with_button_includes_style() {
    let report = BackToTopReport {
        found: true,
        classes: "back-to-top active".to_owned(),
        visibility: "visible".to_owned(),
        opacity: "1".to_owned(),
    };
    let lines = report.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "Button classes: back-to-top active");
    assert_eq!(lines[2], "Button visible: visible");
}

#[test]
fn gallery_check_answers_to_check_isotope() {
    assert_eq!(GALLERY_CHECK_NAMES[0], "checkIsotope");
    assert!(GALLERY_CHECK_NAMES.contains(&"checkGallery"));
}
