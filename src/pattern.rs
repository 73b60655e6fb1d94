//! Detonation layouts.
//!
//! When a burst detonates it throws out particles in one of two layouts:
//!
//! | Pattern | Count | Layout |
//! |---------|-------|--------|
//! | [`Pattern::Radial`] | 25–50 (configurable) | Evenly spaced around the full circle, one shared speed |
//! | [`Pattern::Star`] | always 32 | 8 rays π/4 apart, 4 sparks per ray at graded speeds |
//!
//! Velocity layouts are pure functions of their inputs; only the radial
//! speed jitter and the particle colors consume randomness.

use std::f32::consts::{FRAC_PI_4, TAU};

use glam::Vec2;
use rand::Rng;

use crate::color::random_color;
use crate::config::BurstConfig;
use crate::particle::Particle;

/// Number of particles in a star detonation.
pub const STAR_PARTICLES: u32 = 32;
/// Number of rays in a star detonation.
pub const STAR_SECTORS: u32 = 8;
const STAR_PER_SECTOR: u32 = STAR_PARTICLES / STAR_SECTORS;

/// A detonation layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Particles evenly spread around the full circle.
    Radial,
    /// Eight rays of four speed-graded particles.
    Star,
}

/// How a burst picks its layout at detonation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternMode {
    /// Radial or star with equal probability.
    #[default]
    Random,
    /// Always the given layout.
    Fixed(Pattern),
}

impl PatternMode {
    /// Pick the layout for one detonation.
    ///
    /// `Fixed` consumes no randomness.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Pattern {
        match self {
            PatternMode::Random => {
                if rng.gen_bool(0.5) {
                    Pattern::Radial
                } else {
                    Pattern::Star
                }
            }
            PatternMode::Fixed(pattern) => pattern,
        }
    }
}

impl Pattern {
    /// Build the particles of one detonation at `origin`.
    ///
    /// `count` is honored by the radial layout and ignored by the star.
    pub fn spawn<R: Rng + ?Sized>(
        self,
        origin: Vec2,
        count: u32,
        config: &BurstConfig,
        rng: &mut R,
    ) -> Vec<Particle> {
        let velocities = match self {
            Pattern::Radial => {
                // One of {base - 1, base}, shared by the whole ring.
                let speed = config.base_speed - 1.0 + rng.gen_range(0..2) as f32;
                radial_velocities(count, speed)
            }
            Pattern::Star => star_velocities(config.base_speed),
        };

        velocities
            .into_iter()
            .map(|velocity| Particle::new(origin, velocity, random_color(rng)))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Radial => "radial",
            Pattern::Star => "star",
        }
    }
}

/// `count` velocities of magnitude `speed`, starting straight down the y axis
/// and stepping `2π / count` around the circle.
pub fn radial_velocities(count: u32, speed: f32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f32;
    (0..count)
        .map(|i| {
            let angle = step * i as f32;
            Vec2::new(angle.sin() * speed, angle.cos() * speed)
        })
        .collect()
}

/// The 32 velocities of a star detonation.
///
/// For the 1-based index `i`, speed is `base_speed + (i % 4)`, so each ray
/// carries speeds base+1, base+2, base+3, base+0 in that order. The ray angle
/// moves on by π/4 after each particle where `i % 4 == 0`.
pub fn star_velocities(base_speed: f32) -> Vec<Vec2> {
    let mut angle = 0.0f32;
    let mut velocities = Vec::with_capacity(STAR_PARTICLES as usize);
    for i in 1..=STAR_PARTICLES {
        let speed = base_speed + (i % STAR_PER_SECTOR) as f32;
        velocities.push(Vec2::new(angle.sin() * speed, angle.cos() * speed));
        if i % STAR_PER_SECTOR == 0 {
            angle += FRAC_PI_4;
        }
    }
    velocities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-4;

    fn angle_of(v: Vec2) -> f32 {
        // Velocities are (sin θ, cos θ) scaled, so θ = atan2(x, y).
        v.x.atan2(v.y).rem_euclid(TAU)
    }

    #[test]
    fn test_radial_partitions_full_circle() {
        for count in [25u32, 31, 49] {
            let velocities = radial_velocities(count, 4.0);
            assert_eq!(velocities.len(), count as usize);

            let step = TAU / count as f32;
            assert!((step * count as f32 - TAU).abs() < EPS);

            for (i, v) in velocities.iter().enumerate() {
                let expected = step * i as f32;
                let diff = (angle_of(*v) - expected).abs();
                assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "i={i} diff={diff}");
                assert!((v.length() - 4.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_radial_first_particle_points_down() {
        let velocities = radial_velocities(30, 3.0);
        assert!(velocities[0].x.abs() < EPS);
        assert!((velocities[0].y - 3.0).abs() < EPS);
    }

    #[test]
    fn test_radial_zero_count_is_empty() {
        assert!(radial_velocities(0, 4.0).is_empty());
    }

    #[test]
    fn test_star_has_32_particles_in_8_rays() {
        let velocities = star_velocities(4.0);
        assert_eq!(velocities.len(), 32);

        for (sector, chunk) in velocities.chunks(4).enumerate() {
            let expected = FRAC_PI_4 * sector as f32;
            for v in chunk {
                let diff = (angle_of(*v) - expected).abs();
                assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "sector={sector} diff={diff}");
            }
        }

        let mut distinct: Vec<f32> = Vec::new();
        for v in &velocities {
            let a = angle_of(*v);
            if !distinct.iter().any(|d| (d - a).abs() < 1e-3) {
                distinct.push(a);
            }
        }
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_star_speed_grading() {
        let velocities = star_velocities(4.0);
        let speeds: Vec<f32> = velocities[..8].iter().map(|v| v.length()).collect();
        let expected = [5.0, 6.0, 7.0, 4.0, 5.0, 6.0, 7.0, 4.0];
        for (s, e) in speeds.iter().zip(expected) {
            assert!((s - e).abs() < EPS, "{s} != {e}");
        }
    }

    #[test]
    fn test_star_ignores_count() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = BurstConfig::default();
        for count in [1, 25, 49, 500] {
            let particles = Pattern::Star.spawn(Vec2::new(5.0, 5.0), count, &config, &mut rng);
            assert_eq!(particles.len(), 32);
        }
    }

    #[test]
    fn test_radial_spawn_speed_jitter() {
        let config = BurstConfig::default();
        let mut seen_low = false;
        let mut seen_high = false;
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let particles = Pattern::Radial.spawn(Vec2::ZERO, 30, &config, &mut rng);
            assert_eq!(particles.len(), 30);
            let speed = particles[0].velocity.length();
            assert!(particles.iter().all(|p| (p.velocity.length() - speed).abs() < EPS));
            if (speed - 3.0).abs() < EPS {
                seen_low = true;
            } else if (speed - 4.0).abs() < EPS {
                seen_high = true;
            } else {
                panic!("unexpected radial speed {speed}");
            }
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_spawned_particles_start_opaque_at_origin() {
        let mut rng = SmallRng::seed_from_u64(3);
        let origin = Vec2::new(120.0, 80.0);
        let particles = Pattern::Radial.spawn(origin, 40, &BurstConfig::default(), &mut rng);
        for p in &particles {
            assert_eq!(p.position, origin);
            assert_eq!(p.alpha, 255);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_fixed_mode_resolves_without_rng() {
        let mut rng = SmallRng::seed_from_u64(5);
        assert_eq!(PatternMode::Fixed(Pattern::Star).resolve(&mut rng), Pattern::Star);
        assert_eq!(PatternMode::Fixed(Pattern::Radial).resolve(&mut rng), Pattern::Radial);
    }

    #[test]
    fn test_random_mode_picks_both() {
        let mut rng = SmallRng::seed_from_u64(8);
        let radial = (0..1000)
            .filter(|_| PatternMode::Random.resolve(&mut rng) == Pattern::Radial)
            .count();
        assert!((350..650).contains(&radial), "radial picked {radial} times");
    }
}
