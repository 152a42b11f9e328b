#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::consts::{MAX_OPACITY, MAX_RADIUS, MAX_SPEED, MIN_OPACITY, MIN_RADIUS, PARTICLE_COUNT};

/// Width and height of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(0.0), height: height.max(0.0) }
    }

    /// Whether the surface has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A single drifting dot.
///
/// Velocity and opacity are fixed at creation; only the position changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

impl Particle {
    /// Draw a particle uniformly inside `bounds` with randomized size, speed and opacity.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: SurfaceSize) -> Self {
        Self {
            x: sample_position(rng, bounds.width),
            y: sample_position(rng, bounds.height),
            size: rng.random_range(MIN_RADIUS..MAX_RADIUS),
            speed_x: rng.random_range(-MAX_SPEED..MAX_SPEED),
            speed_y: rng.random_range(-MAX_SPEED..MAX_SPEED),
            opacity: rng.random_range(MIN_OPACITY..MAX_OPACITY),
        }
    }

    /// Advance by one frame of velocity and wrap around the surface edges.
    pub fn advance(&mut self, bounds: SurfaceSize) {
        self.x = wrap(self.x + self.speed_x, bounds.width);
        self.y = wrap(self.y + self.speed_y, bounds.height);
    }
}

fn sample_position<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 { rng.random_range(0.0..extent) } else { 0.0 }
}

/// Toroidal wraparound of a single coordinate into `[0, bound]`.
///
/// Values past the upper edge re-enter from zero carrying their overshoot;
/// values below zero re-enter from the upper edge. A degenerate bound pins
/// the coordinate to zero.
#[must_use]
pub fn wrap(value: f64, bound: f64) -> f64 {
    if bound <= 0.0 {
        return 0.0;
    }
    if (0.0..=bound).contains(&value) { value } else { value.rem_euclid(bound) }
}

/// The particle set together with the surface it lives on.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    bounds: SurfaceSize,
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new(bounds: SurfaceSize) -> Self {
        Self { bounds, particles: Vec::with_capacity(PARTICLE_COUNT) }
    }

    /// Replace the particle set with a fresh batch of [`PARTICLE_COUNT`] particles.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let bounds = self.bounds;
        self.particles.clear();
        self.particles
            .extend((0..PARTICLE_COUNT).map(|_| Particle::random(rng, bounds)));
    }

    /// Adopt new surface dimensions. Particles keep their positions; the next
    /// step folds any that now lie outside back into range.
    pub fn resize(&mut self, bounds: SurfaceSize) {
        self.bounds = bounds;
    }

    /// Move every particle by its velocity.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.advance(bounds);
        }
    }

    #[must_use]
    pub fn bounds(&self) -> SurfaceSize {
        self.bounds
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Whether every particle lies inside the closed surface rectangle.
    #[must_use]
    pub fn all_within_bounds(&self) -> bool {
        let SurfaceSize { width, height } = self.bounds;
        self.particles
            .iter()
            .all(|p| (0.0..=width).contains(&p.x) && (0.0..=height).contains(&p.y))
    }
}
