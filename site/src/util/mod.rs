//! Utility helpers shared across feature modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser plumbing (element lookup, listeners, timers, inline styles) lives
//! here so feature modules read as behavior rather than web-sys glue.

pub mod dom;
