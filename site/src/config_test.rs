#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_page() {
    let config = SiteConfig::default();
    assert_eq!(config.hero_id, "hero");
    assert_eq!(config.loading_screen_id, "loading-screen");
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.loading_fade_delay_ms, 1000);
    assert_eq!(config.loading_hide_delay_ms, 500);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(config.gallery_mode, GalleryModeSetting::Auto);
    assert!(config.particles_enabled);
    assert!(!config.follow_system_theme);
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "heroId": "banner", "galleryMode": "fallback" }"#)
        .expect("partial config should parse");
    assert_eq!(config.hero_id, "banner");
    assert_eq!(config.gallery_mode, GalleryModeSetting::Fallback);
    assert_eq!(config.theme_toggle_id, "dark-mode-toggle");
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{ heroId: ").expect_err("garbage should not parse");
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    assert!(SiteConfig::from_json(r#"{ "loadingFadeDelayMs": "soon" }"#).is_err());
}

#[test]
fn unknown_gallery_mode_is_config_error() {
    assert!(SiteConfig::from_json(r#"{ "galleryMode": "sometimes" }"#).is_err());
}

#[test]
fn threshold_is_clamped_into_unit_range() {
    let high = SiteConfig::from_json(r#"{ "revealThreshold": 3.5 }"#).expect("should parse");
    assert_eq!(high.reveal_threshold, 1.0);
    let low = SiteConfig::from_json(r#"{ "revealThreshold": -1 }"#).expect("should parse");
    assert_eq!(low.reveal_threshold, 0.0);
}

#[test]
fn negative_back_to_top_threshold_falls_back_to_default() {
    let config = SiteConfig::from_json(r#"{ "backToTopThresholdPx": -5 }"#).expect("should parse");
    assert_eq!(config.back_to_top_threshold_px, DEFAULT_BACK_TO_TOP_THRESHOLD_PX);
}

#[test]
fn blank_root_margin_falls_back_to_default() {
    let config = SiteConfig::from_json(r#"{ "revealRootMargin": "  " }"#).expect("should parse");
    assert_eq!(config.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN);
}
