//! Page configuration.
//!
//! The page may embed a JSON block
//! `<script type="application/json" id="site-config">…</script>` to override
//! element ids, delays and switches. Every field is optional; omitted fields
//! take the defaults below, which match the stock page markup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::features::gallery::GalleryModeSetting;

/// Id of the inline JSON block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_HERO_ID: &str = "hero";
pub const DEFAULT_LOADING_SCREEN_ID: &str = "loading-screen";
pub const DEFAULT_THEME_TOGGLE_ID: &str = "dark-mode-toggle";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_LOADING_FADE_DELAY_MS: u32 = 1000;
pub const DEFAULT_LOADING_HIDE_DELAY_MS: u32 = 500;
pub const DEFAULT_REVEAL_START_DELAY_MS: u32 = 500;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_GALLERY_PROBE_DELAY_MS: u32 = 1000;
pub const DEFAULT_BACK_TO_TOP_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_DEBUG_REPORT_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub hero_id: String,
    pub particles_enabled: bool,
    pub loading_screen_id: String,
    pub loading_fade_delay_ms: u32,
    pub loading_hide_delay_ms: u32,
    pub reveal_start_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub theme_toggle_id: String,
    pub theme_storage_key: String,
    pub follow_system_theme: bool,
    pub gallery_mode: GalleryModeSetting,
    pub gallery_probe_delay_ms: u32,
    pub back_to_top_threshold_px: f64,
    pub debug_auto_report: bool,
    pub debug_report_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_id: DEFAULT_HERO_ID.to_owned(),
            particles_enabled: true,
            loading_screen_id: DEFAULT_LOADING_SCREEN_ID.to_owned(),
            loading_fade_delay_ms: DEFAULT_LOADING_FADE_DELAY_MS,
            loading_hide_delay_ms: DEFAULT_LOADING_HIDE_DELAY_MS,
            reveal_start_delay_ms: DEFAULT_REVEAL_START_DELAY_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
            theme_toggle_id: DEFAULT_THEME_TOGGLE_ID.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            follow_system_theme: false,
            gallery_mode: GalleryModeSetting::Auto,
            gallery_probe_delay_ms: DEFAULT_GALLERY_PROBE_DELAY_MS,
            back_to_top_threshold_px: DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
            debug_auto_report: true,
            debug_report_delay_ms: DEFAULT_DEBUG_REPORT_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Parse overrides from JSON and normalize out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.normalized())
    }

    /// Clamp values the browser APIs would reject.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        if !self.back_to_top_threshold_px.is_finite() || self.back_to_top_threshold_px < 0.0 {
            self.back_to_top_threshold_px = DEFAULT_BACK_TO_TOP_THRESHOLD_PX;
        }
        if self.reveal_root_margin.trim().is_empty() {
            self.reveal_root_margin = DEFAULT_REVEAL_ROOT_MARGIN.to_owned();
        }
        self
    }

    /// Read the inline config block from the page, falling back to defaults
    /// when it is absent or malformed.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}
