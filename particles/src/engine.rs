use rand::SeedableRng;
use rand::rngs::SmallRng;
#[cfg(feature = "canvas")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "canvas")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::{ParticleField, SurfaceSize};
#[cfg(feature = "canvas")]
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Result of a visibility change, telling the host whether to schedule frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The loop was paused and must be restarted.
    Started,
    /// The loop was running and should stop requesting frames.
    Stopped,
    Unchanged,
}

/// Core animator state: everything that does not depend on the canvas element.
///
/// Separated from `Animator` so it can be tested without WASM/browser dependencies.
/// The loop runs only while the document is visible and the host is in view.
pub struct AnimatorCore {
    pub field: ParticleField,
    document_visible: bool,
    host_in_view: bool,
    rng: SmallRng,
}

impl AnimatorCore {
    /// Build a populated core for a surface of the given size.
    #[must_use]
    pub fn new(bounds: SurfaceSize, seed: u64) -> Self {
        let mut core = Self {
            field: ParticleField::new(bounds),
            document_visible: true,
            host_in_view: true,
            rng: SmallRng::seed_from_u64(seed),
        };
        core.populate();
        core
    }

    /// Build a core for a host that may be missing. No host, no animator.
    #[must_use]
    pub fn attach(host: Option<SurfaceSize>, seed: u64) -> Option<Self> {
        host.map(|bounds| Self::new(bounds, seed))
    }

    /// Regenerate the full particle set inside the current bounds.
    pub fn populate(&mut self) {
        self.field.populate(&mut self.rng);
    }

    pub fn resize(&mut self, bounds: SurfaceSize) {
        self.field.resize(bounds);
    }

    #[must_use]
    pub fn bounds(&self) -> SurfaceSize {
        self.field.bounds()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.document_visible && self.host_in_view
    }

    /// Record whether the page is visible (`document.hidden == false`).
    pub fn set_document_visible(&mut self, visible: bool) -> Transition {
        let was = self.is_running();
        self.document_visible = visible;
        self.transition_from(was)
    }

    /// Record whether the host element intersects the viewport.
    pub fn set_host_in_view(&mut self, in_view: bool) -> Transition {
        let was = self.is_running();
        self.host_in_view = in_view;
        self.transition_from(was)
    }

    fn transition_from(&self, was_running: bool) -> Transition {
        match (was_running, self.is_running()) {
            (false, true) => Transition::Started,
            (true, false) => Transition::Stopped,
            _ => Transition::Unchanged,
        }
    }

    /// Advance one frame. Returns `false` without moving anything while paused.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.field.step();
        true
    }
}

/// The full animator. Wraps `AnimatorCore` and owns the overlay canvas.
#[cfg(feature = "canvas")]
pub struct Animator {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: AnimatorCore,
}

#[cfg(feature = "canvas")]
impl Animator {
    /// Bind the animator to a canvas and size its backing store to the core's bounds.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, core: AnimatorCore) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let animator = Self { canvas, ctx, core };
        animator.apply_surface_size();
        Ok(animator)
    }

    /// Resize the surface. Setting the backing-store size clears it; nothing is rescaled.
    pub fn resize(&mut self, bounds: SurfaceSize) {
        self.core.resize(bounds);
        self.apply_surface_size();
    }

    fn apply_surface_size(&self) {
        let bounds = self.core.bounds();
        self.canvas.set_width(to_px(bounds.width));
        self.canvas.set_height(to_px(bounds.height));
    }

    /// Step and draw one frame. Returns whether a frame was produced.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<bool, JsValue> {
        if !self.core.tick() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.field)
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

#[cfg(feature = "canvas")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(extent: f64) -> u32 {
    extent.max(0.0).round() as u32
}

/// Seed for the particle RNG drawn from the browser's `Math.random` and clock.
#[cfg(feature = "canvas")]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn browser_seed() -> u64 {
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let clock = js_sys::Date::now() as u64;
    (noise << 32) ^ clock
}
