//! Ascending shells that detonate into particles.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::BurstConfig;
use crate::particle::{Bounds, Particle};

/// Lifecycle of a burst. Moves from `Ascending` to `Exploded` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstState {
    Ascending,
    Exploded,
}

/// A shell rising at constant speed until it reaches its explosion altitude.
#[derive(Debug, Clone)]
pub struct Burst {
    position: Vec2,
    ascent_velocity: f32,
    explosion_altitude: f32,
    color: Rgb,
    state: BurstState,
    particles: Vec<Particle>,
    config: BurstConfig,
}

impl Burst {
    /// Create an ascending shell.
    ///
    /// `ascent_velocity` is added to `y` each tick, so upward motion is
    /// negative. The shell detonates on the first tick where
    /// `y <= explosion_altitude`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`BurstConfig::validate`].
    pub fn new(
        position: Vec2,
        ascent_velocity: f32,
        explosion_altitude: f32,
        color: Rgb,
        config: BurstConfig,
    ) -> Self {
        config.validate();
        Self {
            position,
            ascent_velocity,
            explosion_altitude,
            color,
            state: BurstState::Ascending,
            particles: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn explosion_altitude(&self) -> f32 {
        self.explosion_altitude
    }

    #[inline]
    pub fn state(&self) -> BurstState {
        self.state
    }

    #[inline]
    pub fn is_exploded(&self) -> bool {
        self.state == BurstState::Exploded
    }

    /// Exploded with every particle already culled.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.is_exploded() && self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one tick: climb (and possibly detonate), then move every
    /// particle and drop the ones that left `bounds`.
    pub fn advance<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        if self.state == BurstState::Ascending {
            self.position.y += self.ascent_velocity;
            if self.position.y <= self.explosion_altitude {
                self.detonate(rng);
            }
        }

        let particle_config = self.config.particle;
        for particle in &mut self.particles {
            particle.advance(&particle_config);
        }
        self.particles.retain(|p| p.is_within(bounds));
    }

    fn detonate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = BurstState::Exploded;

        let count = rng.gen_range(self.config.min_particles..self.config.max_particles);
        let pattern = self.config.pattern.resolve(rng);
        self.particles = pattern.spawn(self.position, count, &self.config, rng);

        debug!(
            x = self.position.x,
            y = self.position.y,
            pattern = pattern.name(),
            particles = self.particles.len(),
            "burst detonated"
        );
    }

    /// Draw the shell while it climbs, then every particle.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if self.state == BurstState::Ascending {
            canvas.fill_circle(
                self.position.x as i32,
                self.position.y as i32,
                self.config.radius,
                self.color,
            );
        }

        for particle in &self.particles {
            particle.render(canvas, &self.config.particle);
        }
    }
}
