//! Shared numeric constants for the particles crate.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Population ──────────────────────────────────────────────────

/// Number of particles in the field. Constant for the page lifetime.
pub const PARTICLE_COUNT: usize = 50;

/// Smallest particle radius in CSS pixels (inclusive).
pub const MIN_RADIUS: f64 = 1.0;

/// Largest particle radius in CSS pixels (exclusive).
pub const MAX_RADIUS: f64 = 4.0;

/// Per-axis speed bound in pixels per frame; speeds fall in `[-MAX_SPEED, MAX_SPEED)`.
pub const MAX_SPEED: f64 = 0.25;

/// Lowest particle opacity (inclusive).
pub const MIN_OPACITY: f64 = 0.2;

/// Highest particle opacity (exclusive).
pub const MAX_OPACITY: f64 = 0.7;

// ── Appearance ──────────────────────────────────────────────────

/// Fixed particle hue as an `(r, g, b)` triple. Matches the site accent colour.
pub const PARTICLE_RGB: (u8, u8, u8) = (20, 157, 221);

/// Opacity of the whole overlay canvas.
pub const OVERLAY_OPACITY: &str = "0.1";

/// Inline style applied to the overlay `<canvas>`: pinned over the host,
/// non-interactive, faint.
pub const OVERLAY_STYLE: [(&str, &str); 7] = [
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("opacity", OVERLAY_OPACITY),
];
