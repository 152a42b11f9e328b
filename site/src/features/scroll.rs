//! In-page navigation: smooth scrolling for `#anchor` links and the
//! back-to-top button.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]:not(.back-to-top)";
pub const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
pub const BACK_TO_TOP_ACTIVE_CLASS: &str = "active";

/// Element id an in-page link points at. The bare `#` points nowhere.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether the back-to-top button should be showing at this scroll offset.
#[must_use]
pub fn back_to_top_active(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

#[cfg(feature = "hydrate")]
pub use browser::{init_back_to_top, init_smooth_scroll};

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

    use super::{ANCHOR_SELECTOR, BACK_TO_TOP_ACTIVE_CLASS, BACK_TO_TOP_SELECTOR, anchor_target_id, back_to_top_active};
    use crate::config::SiteConfig;
    use crate::error::SiteError;
    use crate::util::dom;

    pub fn init_smooth_scroll() -> Result<(), SiteError> {
        let document = dom::document()?;
        for anchor in dom::query_all(&document, ANCHOR_SELECTOR)? {
            let link = anchor.clone();
            let doc = document.clone();
            dom::listen(&anchor, "click", move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(target) = anchor_target_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            })?;
        }
        Ok(())
    }

    pub fn init_back_to_top(config: &SiteConfig) -> Result<(), SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let button = dom::query(&document, BACK_TO_TOP_SELECTOR)?.ok_or_else(|| SiteError::missing(BACK_TO_TOP_SELECTOR))?;

        let scroller = window.clone();
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            scroller.scroll_to_with_scroll_to_options(&options);
        })?;

        let threshold = config.back_to_top_threshold_px;
        let watcher = window.clone();
        dom::listen(&window, "scroll", move |_| {
            let offset = watcher.scroll_y().unwrap_or(0.0);
            let result = if back_to_top_active(offset, threshold) {
                dom::add_class(&button, BACK_TO_TOP_ACTIVE_CLASS)
            } else {
                dom::remove_class(&button, BACK_TO_TOP_ACTIVE_CLASS)
            };
            if let Err(err) = result {
                log::warn!("back-to-top: {err}");
            }
        })
    }
}
