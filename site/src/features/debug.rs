//! Developer console helper, exposed to JS as `window.portfolioDebug`.
//!
//! `checkIsotope()` (alias `checkGallery()`) and `checkBackToTop()` log what
//! the page looks like to the scripts; `testBackToTop()` and `testPortfolioFilter(filter)` click the
//! controls programmatically. Diagnostics only; nothing here feeds back into
//! the other features.

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

use crate::features::gallery::FILTER_ATTRIBUTE;
use crate::util::dom::attribute_selector;

/// Global the helper object is installed under.
pub const GLOBAL_NAME: &str = "portfolioDebug";

/// Names the gallery check is published under. `checkIsotope` is the one page
/// authors already type; `checkGallery` is kept as an alias.
pub const GALLERY_CHECK_NAMES: [&str; 2] = ["checkIsotope", "checkGallery"];

/// What the gallery filter code can see.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryReport {
    pub plugin_loaded: bool,
    pub plugin_bound: bool,
    pub container_present: bool,
    pub filter_count: usize,
    pub item_count: usize,
}

impl GalleryReport {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Isotope available: {}", self.plugin_loaded),
            format!("Isotope bound to container: {}", self.plugin_bound),
            format!("Portfolio container: {}", found(self.container_present)),
            format!("Portfolio filters: {}", self.filter_count),
            format!("Portfolio items: {}", self.item_count),
        ]
    }
}

/// What the back-to-top button looks like right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackToTopReport {
    pub found: bool,
    pub classes: String,
    pub visibility: String,
    pub opacity: String,
}

impl BackToTopReport {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Button found: {}", self.found)];
        if self.found {
            lines.push(format!("Button classes: {}", self.classes));
            lines.push(format!("Button visible: {}", self.visibility));
            lines.push(format!("Button opacity: {}", self.opacity));
        }
        lines
    }
}

fn found(present: bool) -> &'static str {
    if present { "found" } else { "missing" }
}

/// Selector for the filter control carrying `filter` (default `*`).
#[must_use]
pub fn filter_control_selector(filter: Option<&str>) -> String {
    let filter = filter.map(str::trim).filter(|f| !f.is_empty()).unwrap_or("*");
    attribute_selector(FILTER_ATTRIBUTE, filter)
}

#[cfg(feature = "hydrate")]
pub use browser::{auto_report, install};

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::{BackToTopReport, GALLERY_CHECK_NAMES, GLOBAL_NAME, GalleryReport, filter_control_selector};
    use crate::config::SiteConfig;
    use crate::error::{SiteError, report};
    use crate::features::gallery::{CONTAINER_SELECTOR, FILTER_SELECTOR, ITEM_SELECTOR, plugin_bound, plugin_loaded};
    use crate::features::scroll::BACK_TO_TOP_SELECTOR;
    use crate::util::dom;

    fn gallery_report() -> Result<GalleryReport, SiteError> {
        let document = dom::document()?;
        let container = dom::query(&document, CONTAINER_SELECTOR)?;
        Ok(GalleryReport {
            plugin_loaded: plugin_loaded(),
            plugin_bound: container.as_ref().is_some_and(|c| plugin_bound(c)),
            container_present: container.is_some(),
            filter_count: dom::query_all(&document, FILTER_SELECTOR)?.len(),
            item_count: dom::query_all(&document, ITEM_SELECTOR)?.len(),
        })
    }

    fn back_to_top_report() -> Result<BackToTopReport, SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let Some(button) = dom::query(&document, BACK_TO_TOP_SELECTOR)? else {
            return Ok(BackToTopReport::default());
        };
        let computed = window.get_computed_style(&button)?;
        let property = |name: &str| {
            computed
                .as_ref()
                .and_then(|style| style.get_property_value(name).ok())
                .unwrap_or_default()
        };
        Ok(BackToTopReport {
            found: true,
            classes: button.class_name(),
            visibility: property("visibility"),
            opacity: property("opacity"),
        })
    }

    fn check_gallery() {
        log::info!("Checking gallery filter...");
        match gallery_report() {
            Ok(r) => r.lines().iter().for_each(|line| log::info!("{line}")),
            Err(err) => log::warn!("checkIsotope: {err}"),
        }
    }

    fn check_back_to_top() {
        log::info!("Checking back to top button...");
        match back_to_top_report() {
            Ok(r) => r.lines().iter().for_each(|line| log::info!("{line}")),
            Err(err) => log::warn!("checkBackToTop: {err}"),
        }
    }

    fn click(selector: &str) -> Result<(), SiteError> {
        let document = dom::document()?;
        match dom::query(&document, selector)? {
            Some(el) => el.click(),
            None => log::info!("nothing matches {selector}"),
        }
        Ok(())
    }

    fn set_fn(target: &Object, name: &str, f: JsValue) -> Result<(), SiteError> {
        Reflect::set(target, &JsValue::from_str(name), &f)?;
        Ok(())
    }

    /// Publish the helper object on `window`.
    pub fn install() -> Result<(), SiteError> {
        let api = Object::new();
        let gallery = Closure::<dyn Fn()>::new(check_gallery).into_js_value();
        for name in GALLERY_CHECK_NAMES {
            set_fn(&api, name, gallery.clone())?;
        }
        set_fn(&api, "checkBackToTop", Closure::<dyn Fn()>::new(check_back_to_top).into_js_value())?;
        set_fn(
            &api,
            "testBackToTop",
            Closure::<dyn Fn()>::new(|| report("testBackToTop", click(BACK_TO_TOP_SELECTOR))).into_js_value(),
        )?;
        set_fn(
            &api,
            "testPortfolioFilter",
            Closure::<dyn Fn(JsValue)>::new(|filter: JsValue| {
                let selector = filter_control_selector(filter.as_string().as_deref());
                report("testPortfolioFilter", click(&selector));
            })
            .into_js_value(),
        )?;
        Reflect::set(&dom::window()?, &JsValue::from_str(GLOBAL_NAME), &api)?;
        Ok(())
    }

    /// Log both reports once the page has settled. Call after `load`.
    pub fn auto_report(config: &SiteConfig) {
        if !config.debug_auto_report {
            return;
        }
        dom::after(config.debug_report_delay_ms, || {
            log::info!("=== Portfolio Debug Info ===");
            check_gallery();
            check_back_to_top();
        });
    }
}
