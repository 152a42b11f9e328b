//! Scroll-triggered reveal animations.
//!
//! A single `IntersectionObserver` adds [`REVEAL_CLASS`] to elements as they
//! enter the viewport; CSS does the actual fade/slide. Items in a group get
//! a staggered `animation-delay` so a row reveals one card at a time.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class added once an observed element becomes visible.
pub const REVEAL_CLASS: &str = "animate-in";

/// A set of elements revealed with a shared stagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealGroup {
    pub selector: &'static str,
    /// Delay added per item index.
    pub stagger_ms: u32,
    /// Extra wait before observing, for content laid out by other scripts.
    pub defer_ms: u32,
}

pub const REVEAL_GROUPS: [RevealGroup; 3] = [
    RevealGroup { selector: ".skill-item", stagger_ms: 50, defer_ms: 0 },
    // Gallery items are positioned by the filter plugin first.
    RevealGroup { selector: ".portfolio-item", stagger_ms: 100, defer_ms: 100 },
    RevealGroup { selector: ".resume-item", stagger_ms: 100, defer_ms: 0 },
];

/// CSS `animation-delay` for the item at `index`.
#[must_use]
pub fn stagger_delay(index: usize, stagger_ms: u32) -> String {
    let millis = u64::try_from(index).unwrap_or(u64::MAX).saturating_mul(u64::from(stagger_ms));
    format!("{millis}ms")
}

#[cfg(feature = "hydrate")]
pub use browser::{RevealObserver, init};

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{REVEAL_CLASS, REVEAL_GROUPS, RevealGroup, stagger_delay};
    use crate::config::SiteConfig;
    use crate::error::{SiteError, report};
    use crate::util::dom;

    /// Shared observer that tags intersecting elements with [`REVEAL_CLASS`].
    #[derive(Clone)]
    pub struct RevealObserver {
        inner: IntersectionObserver,
    }

    impl RevealObserver {
        pub fn new(config: &SiteConfig) -> Result<Self, SiteError> {
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                |entries: Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            let _ = dom::add_class(&entry.target(), REVEAL_CLASS);
                        }
                    }
                },
            );
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
            options.set_root_margin(&config.reveal_root_margin);
            let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
            callback.forget();
            Ok(Self { inner })
        }

        pub fn observe(&self, el: &Element) {
            self.inner.observe(el);
        }
    }

    fn observe_group(observer: &RevealObserver, group: RevealGroup) -> Result<(), SiteError> {
        let document = dom::document()?;
        for (index, item) in dom::query_all(&document, group.selector)?.iter().enumerate() {
            item.style()
                .set_property("animation-delay", &stagger_delay(index, group.stagger_ms))?;
            observer.observe(item);
        }
        Ok(())
    }

    /// Start observing every reveal group after the configured settle delay.
    pub fn init(config: &SiteConfig, observer: &RevealObserver) -> Result<(), SiteError> {
        let observer = observer.clone();
        dom::after(config.reveal_start_delay_ms, move || {
            for group in REVEAL_GROUPS {
                if group.defer_ms == 0 {
                    report(group.selector, observe_group(&observer, group));
                } else {
                    let observer = observer.clone();
                    dom::after(group.defer_ms, move || {
                        report(group.selector, observe_group(&observer, group));
                    });
                }
            }
        });
        Ok(())
    }
}
