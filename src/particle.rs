//! Sparks thrown out by a detonating burst.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::ParticleConfig;

/// Canvas extent used to cull entities that leave the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half-open containment: `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width && pos.y >= 0.0 && pos.y < self.height
    }
}

/// A single fading spark moving at constant velocity.
///
/// Alpha only ever decreases. A fully transparent particle keeps moving
/// until its owning burst culls it at the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Rgb,
    pub alpha: u8,
}

impl Particle {
    /// Create a fully opaque particle.
    pub fn new(position: Vec2, velocity: Vec2, color: Rgb) -> Self {
        Self {
            position,
            velocity,
            color,
            alpha: u8::MAX,
        }
    }

    /// Move one step and fade.
    #[inline]
    pub fn advance(&mut self, config: &ParticleConfig) {
        self.position += self.velocity;
        self.alpha = self.alpha.saturating_sub(config.alpha_decrement);
    }

    #[inline]
    pub fn is_within(&self, bounds: Bounds) -> bool {
        bounds.contains(self.position)
    }

    pub fn render(&self, canvas: &mut dyn Canvas, config: &ParticleConfig) {
        canvas.fill_rect(
            self.position.x as i32,
            self.position.y as i32,
            config.width,
            config.height,
            self.color,
            self.alpha,
        );
    }
}
