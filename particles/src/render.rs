//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the field and produces pixels; it does not
//! mutate any animator state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Animator::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::PARTICLE_RGB;
use crate::field::{Particle, ParticleField};

/// Clear the whole surface, then draw every particle as a filled circle.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);

    for particle in field.particles() {
        draw_particle(ctx, particle)?;
    }
    Ok(())
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(particle.x, particle.y, particle.size, 0.0, TAU)?;
    ctx.set_fill_style_str(&fill_style(particle.opacity));
    ctx.fill();
    Ok(())
}

/// CSS colour for a particle: the fixed hue at the particle's opacity.
#[must_use]
pub fn fill_style(opacity: f64) -> String {
    let (r, g, b) = PARTICLE_RGB;
    format!("rgba({r}, {g}, {b}, {opacity})")
}
