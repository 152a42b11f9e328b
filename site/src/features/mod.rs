//! Page behaviors, one module per feature.
//!
//! Each module keeps its decision logic in plain functions and types that
//! test natively, with the `hydrate`-gated half doing the DOM wiring.

pub mod debug;
pub mod gallery;
pub mod hero;
pub mod loading;
pub mod reveal;
pub mod scroll;
pub mod skills;
pub mod theme;
