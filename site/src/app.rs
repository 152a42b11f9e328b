//! Feature wiring and page lifecycle.
//!
//! The module may start before or after the document finishes parsing, so
//! each phase either runs immediately or waits for its event depending on
//! `document.readyState`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Page lifecycle points features hang off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// DOM parsed (`DOMContentLoaded`).
    DomReady,
    /// Everything loaded, images included (window `load`).
    Loaded,
}

impl Phase {
    /// Whether this phase has already passed at the given `readyState`.
    #[must_use]
    pub fn reached(self, ready_state: &str) -> bool {
        match self {
            Self::DomReady => matches!(ready_state, "interactive" | "complete"),
            Self::Loaded => ready_state == "complete",
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use super::Phase;
    use crate::config::SiteConfig;
    use crate::error::{SiteError, report};
    use crate::features::loading::FadeSchedule;
    use crate::features::{debug, gallery, hero, loading, reveal, scroll, skills, theme};
    use crate::util::dom;

    /// Run `f` at `phase`: now if it has passed, otherwise on its event.
    fn at_phase<F>(phase: Phase, f: F) -> Result<(), SiteError>
    where
        F: FnOnce() + 'static,
    {
        let document = dom::document()?;
        if phase.reached(&document.ready_state()) {
            f();
            return Ok(());
        }
        let mut once = Some(f);
        let handler = move |_: web_sys::Event| {
            if let Some(f) = once.take() {
                f();
            }
        };
        match phase {
            Phase::DomReady => dom::listen(&document, "DOMContentLoaded", handler),
            Phase::Loaded => dom::listen(&dom::window()?, "load", handler),
        }
    }

    fn on_dom_ready(config: &SiteConfig) {
        report("hero typing", hero::apply_typing_effect(config));
        if config.particles_enabled {
            report("particles", hero::mount_particles(config));
        }

        match reveal::RevealObserver::new(config) {
            Ok(observer) => {
                report("reveal", reveal::init(config, &observer));
                report("skills", skills::init(&observer));
            }
            Err(err) => report("reveal", Err(err)),
        }

        report("theme", theme::init(config));
        report("gallery", gallery::init(config));
        report("smooth scroll", scroll::init_smooth_scroll());
        report("back to top", scroll::init_back_to_top(config));
    }

    fn on_loaded(config: &SiteConfig) {
        report(
            "loading",
            loading::run(FadeSchedule::from_config(config), &config.loading_screen_id),
        );
        debug::auto_report(config);
    }

    /// Attach every feature to the page. Each one is independent; a failure
    /// is logged and the rest carry on.
    pub fn mount(config: SiteConfig) {
        let config = Rc::new(config);
        report("debug helper", debug::install());

        let ready = Rc::clone(&config);
        report("dom ready", at_phase(Phase::DomReady, move || on_dom_ready(&ready)));

        let loaded = Rc::clone(&config);
        report("page load", at_phase(Phase::Loaded, move || on_loaded(&loaded)));
    }
}
