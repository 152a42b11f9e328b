//! Portfolio gallery filtering fallback.
//!
//! The stock page filters its gallery with the Isotope plugin. When the
//! plugin is missing or never bound to the container, the filter controls
//! get plain click handlers that show or hide items by class instead.
//!
//! The choice is made once, after a grace period for the plugin to
//! initialize, and is fixed for the page lifetime.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use serde::{Deserialize, Serialize};

pub const CONTAINER_SELECTOR: &str = ".portfolio-container";
pub const FILTER_SELECTOR: &str = "#portfolio-flters li";
pub const ITEM_SELECTOR: &str = ".portfolio-item";
pub const FILTER_ATTRIBUTE: &str = "data-filter";
pub const ACTIVE_CLASS: &str = "filter-active";

/// Inline style for an item that matches the active filter.
pub const VISIBLE_STYLE: [(&str, &str); 3] = [("display", "block"), ("opacity", "1"), ("transform", "translateY(0)")];

/// Configured gallery behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryModeSetting {
    /// Detect the plugin at runtime.
    #[default]
    Auto,
    Plugin,
    Fallback,
}

/// Resolved gallery behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryMode {
    /// The plugin handles filtering; nothing is bound.
    Plugin,
    /// Built-in class-matching filter.
    Fallback,
}

impl GalleryModeSetting {
    #[must_use]
    pub fn resolve(self, plugin_bound: bool) -> GalleryMode {
        match self {
            Self::Plugin => GalleryMode::Plugin,
            Self::Fallback => GalleryMode::Fallback,
            Self::Auto if plugin_bound => GalleryMode::Plugin,
            Self::Auto => GalleryMode::Fallback,
        }
    }
}

/// A parsed `data-filter` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelector {
    All,
    Class(String),
}

impl FilterSelector {
    /// `*` (or nothing) selects everything; `.web` and `web` both select class `web`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.strip_prefix('.').unwrap_or(raw) {
            "" | "*" => Self::All,
            class => Self::Class(class.to_owned()),
        }
    }

    #[must_use]
    pub fn matches<I: GalleryItem + ?Sized>(&self, item: &I) -> bool {
        match self {
            Self::All => true,
            Self::Class(class) => item.has_class(class),
        }
    }
}

/// An item the filter can show or hide.
pub trait GalleryItem {
    fn has_class(&self, class: &str) -> bool;
    fn set_visible(&self, visible: bool);
}

/// Show matching items and hide the rest. Returns how many are visible.
pub fn apply_filter<I: GalleryItem>(selector: &FilterSelector, items: &[I]) -> usize {
    items
        .iter()
        .filter(|item| {
            let visible = selector.matches(*item);
            item.set_visible(visible);
            visible
        })
        .count()
}

#[cfg(feature = "hydrate")]
pub use browser::{init, plugin_bound, plugin_loaded};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, HtmlElement};

    use super::{
        ACTIVE_CLASS, CONTAINER_SELECTOR, FILTER_ATTRIBUTE, FILTER_SELECTOR, FilterSelector, GalleryItem, GalleryMode,
        ITEM_SELECTOR, VISIBLE_STYLE, apply_filter,
    };
    use crate::config::SiteConfig;
    use crate::error::{SiteError, report};
    use crate::util::dom;

    impl GalleryItem for HtmlElement {
        fn has_class(&self, class: &str) -> bool {
            self.class_list().contains(class)
        }

        fn set_visible(&self, visible: bool) {
            let result = if visible {
                dom::set_styles(self, &VISIBLE_STYLE)
            } else {
                dom::set_styles(self, &[("display", "none")])
            };
            if let Err(err) = result {
                log::warn!("gallery: {err}");
            }
        }
    }

    fn global(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    /// Whether the Isotope constructor is present on the page.
    #[must_use]
    pub fn plugin_loaded() -> bool {
        global("Isotope").is_some_and(|value| value.is_function())
    }

    /// Whether Isotope has an instance bound to `container`, via its
    /// documented `Isotope.data(element)` lookup.
    #[must_use]
    pub fn plugin_bound(container: &Element) -> bool {
        let Some(isotope) = global("Isotope") else {
            return false;
        };
        let Ok(data) = Reflect::get(&isotope, &JsValue::from_str("data")) else {
            return false;
        };
        let Ok(data) = data.dyn_into::<Function>() else {
            return false;
        };
        data.call1(&isotope, container)
            .is_ok_and(|instance| !instance.is_undefined() && !instance.is_null())
    }

    /// Ask the AOS scroll-animation library, if present, to recompute positions.
    fn refresh_scroll_animations() {
        let Some(aos) = global("AOS") else {
            return;
        };
        let refresh = Reflect::get(&aos, &JsValue::from_str("refresh"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(refresh) = refresh {
            if let Err(err) = refresh.call0(&aos) {
                log::debug!("gallery: AOS.refresh failed: {err:?}");
            }
        }
    }

    /// After the probe delay, decide the gallery mode and bind the fallback if needed.
    pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
        let setting = config.gallery_mode;
        dom::after(config.gallery_probe_delay_ms, move || {
            report("gallery", bind(setting));
        });
        Ok(())
    }

    fn bind(setting: super::GalleryModeSetting) -> Result<(), SiteError> {
        let document = dom::document()?;
        let container = dom::query(&document, CONTAINER_SELECTOR)?.ok_or_else(|| SiteError::missing(CONTAINER_SELECTOR))?;

        let mode = setting.resolve(plugin_bound(&container));
        log::debug!("gallery: {mode:?} mode");
        if mode == GalleryMode::Plugin {
            return Ok(());
        }

        let filters = Rc::new(dom::query_all(&document, FILTER_SELECTOR)?);
        let items = Rc::new(dom::query_all(&document, ITEM_SELECTOR)?);
        for control in filters.iter() {
            let filters = Rc::clone(&filters);
            let items = Rc::clone(&items);
            let clicked = control.clone();
            dom::listen(control, "click", move |event| {
                event.prevent_default();
                for other in filters.iter() {
                    let _ = dom::remove_class(other, ACTIVE_CLASS);
                }
                let _ = dom::add_class(&clicked, ACTIVE_CLASS);

                let raw = clicked.get_attribute(FILTER_ATTRIBUTE).unwrap_or_default();
                let shown = apply_filter(&FilterSelector::parse(&raw), &items);
                log::debug!("gallery: filter {raw:?} shows {shown} of {}", items.len());
                refresh_scroll_animations();
            })?;
        }
        Ok(())
    }
}
