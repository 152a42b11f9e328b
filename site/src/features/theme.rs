//! Dark/light theme toggle.
//!
//! Reads the visitor's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. A click on the toggle
//! flips the theme, writes it back and swaps the toggle icon.
//!
//! TRADE-OFFS
//! ==========
//! The current theme is held by a [`ThemeController`] rather than read back
//! from the document, so the toggle does not depend on other scripts leaving
//! the attribute alone. Persistence is best-effort: storage failures leave
//! the in-page theme applied.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Anything but the two known values is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle icon class: the sun offers a way out of dark mode, the moon a way in.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bx bx-moon",
            Self::Dark => "bx bx-sun",
        }
    }
}

/// Where the preference is persisted.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// Where the theme is shown.
pub trait ThemeView {
    fn show(&mut self, theme: Theme);
}

/// Owns the current theme and keeps store and view in step with it.
pub struct ThemeController<S, V> {
    store: S,
    view: V,
    current: Theme,
}

impl<S: ThemeStore, V: ThemeView> ThemeController<S, V> {
    /// Restore the stored preference, if any.
    ///
    /// With nothing stored, a theme the page already carries (`page_theme`,
    /// read from `data-theme` in the served HTML) wins, then the system
    /// preference when `system_prefers_dark` is `Some(true)`. Otherwise the
    /// page keeps its default (light) styling.
    pub fn init(store: S, mut view: V, page_theme: Option<Theme>, system_prefers_dark: Option<bool>) -> Self {
        let restored = store
            .load()
            .or(page_theme)
            .or_else(|| system_prefers_dark.filter(|dark| *dark).map(|_| Theme::Dark));
        if let Some(theme) = restored {
            view.show(theme);
        }
        Self { store, view, current: restored.unwrap_or_default() }
    }

    /// Flip the theme, show it and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.view.show(next);
        self.store.save(next);
        self.current = next;
        next
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Element, Storage};

    use super::{THEME_ATTRIBUTE, Theme, ThemeController, ThemeStore, ThemeView};
    use crate::config::SiteConfig;
    use crate::error::SiteError;
    use crate::util::dom;

    /// `localStorage`-backed preference.
    pub struct LocalStorageStore {
        storage: Option<Storage>,
        key: String,
    }

    impl ThemeStore for LocalStorageStore {
        fn load(&self) -> Option<Theme> {
            let raw = self.storage.as_ref()?.get_item(&self.key).ok().flatten()?;
            Theme::parse(&raw)
        }

        fn save(&mut self, theme: Theme) {
            let Some(storage) = &self.storage else {
                return;
            };
            if let Err(err) = storage.set_item(&self.key, theme.as_str()) {
                log::warn!("theme: could not persist preference: {err:?}");
            }
        }
    }

    /// `<html data-theme>` plus the icon inside the toggle.
    pub struct DocumentView {
        root: Option<Element>,
        icon: Option<Element>,
    }

    impl ThemeView for DocumentView {
        fn show(&mut self, theme: Theme) {
            if let Some(root) = &self.root {
                let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
            if let Some(icon) = &self.icon {
                icon.set_class_name(theme.icon_class());
            }
        }
    }

    fn system_prefers_dark() -> Option<bool> {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }

    /// Restore the saved theme and bind the toggle button.
    pub fn init(config: &SiteConfig) -> Result<(), SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let toggle: Element = dom::require_by_id(&document, &config.theme_toggle_id)?;

        let store = LocalStorageStore {
            storage: window.local_storage().ok().flatten(),
            key: config.theme_storage_key.clone(),
        };
        let root = document.document_element();
        let page_theme = root
            .as_ref()
            .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
            .and_then(|raw| Theme::parse(&raw));
        let view = DocumentView { root, icon: toggle.query_selector("i")? };
        let system = if config.follow_system_theme { system_prefers_dark() } else { None };

        let controller = Rc::new(RefCell::new(ThemeController::init(store, view, page_theme, system)));
        dom::listen(&toggle, "click", move |_| {
            let theme = controller.borrow_mut().toggle();
            log::debug!("theme: switched to {}", theme.as_str());
        })
    }
}
