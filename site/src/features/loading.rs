//! Loading screen fade-out.
//!
//! Once the window has finished loading, the overlay fades (via a CSS class)
//! and is then removed from layout.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use crate::config::SiteConfig;

pub const FADE_CLASS: &str = "fade-out";

/// Two-phase fade timeline, in milliseconds after the `load` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeSchedule {
    pub fade_after_ms: u32,
    /// Measured from the fade, not from `load`.
    pub hide_after_ms: u32,
}

impl FadeSchedule {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self { fade_after_ms: config.loading_fade_delay_ms, hide_after_ms: config.loading_hide_delay_ms }
    }

    /// Time from `load` until the overlay is gone.
    #[must_use]
    pub fn total_ms(&self) -> u32 {
        self.fade_after_ms.saturating_add(self.hide_after_ms)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::run;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::HtmlElement;

    use super::{FADE_CLASS, FadeSchedule};
    use crate::error::{SiteError, report};
    use crate::util::dom;

    /// Start the fade. Call after the window `load` event.
    pub fn run(schedule: FadeSchedule, screen_id: &str) -> Result<(), SiteError> {
        let document = dom::document()?;
        let screen: HtmlElement = dom::require_by_id(&document, screen_id)?;
        dom::after(schedule.fade_after_ms, move || {
            report("loading", dom::add_class(&screen, FADE_CLASS));
            dom::after(schedule.hide_after_ms, move || {
                report("loading", dom::set_styles(&screen, &[("display", "none")]));
            });
        });
        Ok(())
    }
}
