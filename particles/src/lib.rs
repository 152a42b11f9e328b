//! Ambient particle background for the portfolio hero section.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drifting dot field drawn behind the hero banner: a fixed set of particles,
//! the toroidal step rule that moves them, the surface dimensions they live
//! in, and the Canvas2D pass that paints them. The `site` crate is responsible
//! only for finding the host element, wiring resize/visibility events and
//! driving the per-frame loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level animator and testable [`engine::AnimatorCore`] |
//! | [`field`] | Particle type, population and the wraparound step |
//! | [`render`] | Clears the surface and draws the particle set |
//! | [`consts`] | Shared numeric constants (count, ranges, colour, overlay style) |
//!
//! The `canvas` feature (on by default) adds the browser half: the canvas-owning
//! `engine::Animator` and the `render` module. With it off, the crate is plain
//! Rust and pulls in no browser bindings.

pub mod consts;
pub mod engine;
pub mod field;
#[cfg(feature = "canvas")]
pub mod render;
