//! Skill section interactions: a short click pulse on skill chips and
//! progress bars that fill to their `aria-valuenow` when revealed.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

pub const SKILL_SELECTOR: &str = ".skill-item";
pub const PROGRESS_SELECTOR: &str = ".progress-bar";
pub const CLICK_CLASS: &str = "clicked";
pub const CLICK_PULSE_MS: u32 = 300;

/// Width for a progress bar from its `aria-valuenow`, clamped to `0..=100`.
///
/// Returns `None` for a missing or non-numeric value so the bar keeps its
/// stylesheet width.
#[must_use]
pub fn progress_width(aria_valuenow: Option<&str>) -> Option<String> {
    let value = aria_valuenow?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    // `+ 0.0` folds negative zero.
    Some(format!("{}%", value.clamp(0.0, 100.0) + 0.0))
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use super::{CLICK_CLASS, CLICK_PULSE_MS, PROGRESS_SELECTOR, SKILL_SELECTOR, progress_width};
    use crate::error::SiteError;
    use crate::features::reveal::RevealObserver;
    use crate::util::dom;

    pub fn init(observer: &RevealObserver) -> Result<(), SiteError> {
        let document = dom::document()?;

        for item in dom::query_all(&document, SKILL_SELECTOR)? {
            let target = item.clone();
            dom::listen(&item, "click", move |_| {
                let _ = dom::add_class(&target, CLICK_CLASS);
                let target = target.clone();
                dom::after(CLICK_PULSE_MS, move || {
                    let _ = dom::remove_class(&target, CLICK_CLASS);
                });
            })?;
        }

        for bar in dom::query_all(&document, PROGRESS_SELECTOR)? {
            observer.observe(&bar);
            let target = bar.clone();
            dom::listen(&bar, "animationstart", move |_| {
                let raw = target.get_attribute("aria-valuenow");
                if let Some(width) = progress_width(raw.as_deref()) {
                    let _ = target.style().set_property("width", &width);
                }
            })?;
        }
        Ok(())
    }
}
