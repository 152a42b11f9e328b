//! # site
//!
//! WASM behaviors for the static portfolio page. The HTML is authored and
//! served as-is; this crate attaches to it at load time and adds the loading
//! fade, scroll reveals, the hero particle backdrop, the theme toggle, the
//! gallery filter fallback, smooth scrolling and a console debug helper.
//!
//! Every feature is independent and fail-silent: a missing element skips
//! that feature only. Browser glue is gated behind the `hydrate` feature so
//! the decision logic in each module tests natively.

pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod util;

/// WASM entry point: install logging, read page config, wire every feature.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let config = config::SiteConfig::load();
    app::mount(config);
}
