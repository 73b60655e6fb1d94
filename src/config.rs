//! Immutable configuration for every entity in the scene.
//!
//! Each entity receives its configuration by value when it is constructed.
//! The defaults reproduce the classic look: 800×600 canvas, four launchers,
//! shells bursting into 25–50 sparks.
//!
//! # Example
//!
//! ```ignore
//! let config = SceneConfig::default()
//!     .with_seed(42)
//!     .with_launcher(LauncherConfig::default().with_ascent_velocity(-8.0));
//! ```

use crate::color::Rgb;
use crate::pattern::PatternMode;

/// Size and fade rate of a single spark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    /// Rectangle width in pixels.
    pub width: u32,
    /// Rectangle height in pixels.
    pub height: u32,
    /// Alpha lost per tick.
    pub alpha_decrement: u8,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 10,
            alpha_decrement: 3,
        }
    }
}

impl ParticleConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_alpha_decrement(mut self, decrement: u8) -> Self {
        self.alpha_decrement = decrement;
        self
    }
}

/// Shell appearance and detonation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstConfig {
    /// Radius of the ascending shell in pixels.
    pub radius: u32,
    /// Inclusive lower bound of the radial particle count.
    pub min_particles: u32,
    /// Exclusive upper bound of the radial particle count.
    pub max_particles: u32,
    /// Base particle speed in pixels per tick. Must exceed 1 so the slowest
    /// radial ring still moves.
    pub base_speed: f32,
    /// How the detonation layout is chosen.
    pub pattern: PatternMode,
    /// Configuration handed to every spawned particle.
    pub particle: ParticleConfig,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            radius: 10,
            min_particles: 25,
            max_particles: 50,
            base_speed: 4.0,
            pattern: PatternMode::Random,
            particle: ParticleConfig::default(),
        }
    }
}

impl BurstConfig {
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the radial particle count range `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `min` is zero or `min >= max`.
    pub fn with_particle_range(mut self, min: u32, max: u32) -> Self {
        self.min_particles = min;
        self.max_particles = max;
        self.validate();
        self
    }

    /// Set the base particle speed.
    ///
    /// # Panics
    ///
    /// Panics unless `speed > 1.0`. Radial rings draw their speed from
    /// `{speed - 1, speed}`, and a ring at speed 0 would never leave the canvas.
    pub fn with_base_speed(mut self, speed: f32) -> Self {
        self.base_speed = speed;
        self.validate();
        self
    }

    pub fn with_pattern(mut self, pattern: PatternMode) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_particle(mut self, particle: ParticleConfig) -> Self {
        self.particle = particle;
        self
    }

    /// Check the invariants the random draws rely on. Fields are public, so
    /// constructors call this again for configs built as struct literals.
    ///
    /// # Panics
    ///
    /// Panics if the particle range is empty or starts at zero, or if
    /// `base_speed <= 1.0`.
    pub fn validate(&self) {
        assert!(self.min_particles > 0, "min_particles must be positive");
        assert!(
            self.min_particles < self.max_particles,
            "min_particles must be below max_particles"
        );
        assert!(self.base_speed > 1.0, "base_speed must be above 1.0");
    }
}

/// Launch pad size and the shells it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LauncherConfig {
    /// Pad width in pixels. Shells leave from the horizontal center.
    pub width: u32,
    /// Pad height in pixels.
    pub height: u32,
    /// Pad color.
    pub color: Rgb,
    /// Vertical shell velocity per tick (negative is upward).
    pub ascent_velocity: f32,
    /// Inclusive lower bound of the explosion altitude.
    pub min_altitude: u32,
    /// Exclusive upper bound of the explosion altitude.
    pub max_altitude: u32,
    /// Configuration handed to every launched shell.
    pub burst: BurstConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            color: Rgb::GREY,
            ascent_velocity: -5.0,
            min_altitude: 50,
            max_altitude: 400,
            burst: BurstConfig::default(),
        }
    }
}

impl LauncherConfig {
    pub fn with_ascent_velocity(mut self, velocity: f32) -> Self {
        self.ascent_velocity = velocity;
        self
    }

    /// Set the explosion altitude range `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn with_altitude_range(mut self, min: u32, max: u32) -> Self {
        self.min_altitude = min;
        self.max_altitude = max;
        self.validate();
        self
    }

    pub fn with_burst(mut self, burst: BurstConfig) -> Self {
        self.burst = burst;
        self
    }

    /// Check the altitude range and the nested [`BurstConfig`].
    ///
    /// # Panics
    ///
    /// Panics if `min_altitude >= max_altitude` or the burst config is invalid.
    pub fn validate(&self) {
        assert!(
            self.min_altitude < self.max_altitude,
            "min_altitude must be below max_altitude"
        );
        self.burst.validate();
    }
}

/// Placement and firing period of one launcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LauncherSpec {
    /// Left edge of the pad.
    pub x: f32,
    /// Milliseconds between launches.
    pub period_ms: u64,
}

impl LauncherSpec {
    pub fn new(x: f32, period_ms: u64) -> Self {
        Self { x, period_ms }
    }
}

/// Top-level configuration: canvas, pacing, randomness and launchers.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Target frames per second.
    pub fps: u32,
    /// Window title.
    pub title: String,
    /// Color the canvas is cleared to each frame.
    pub background: Rgb,
    /// Seed for the random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Launchers, left to right. All sit on the bottom edge.
    pub launchers: Vec<LauncherSpec>,
    /// Configuration shared by every launcher.
    pub launcher: LauncherConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 60,
            title: "Fireworks!".to_string(),
            background: Rgb::BLACK,
            seed: None,
            launchers: vec![
                LauncherSpec::new(100.0, 3000),
                LauncherSpec::new(300.0, 4000),
                LauncherSpec::new(500.0, 2000),
                LauncherSpec::new(700.0, 5000),
            ],
            launcher: LauncherConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Set the canvas size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "canvas must not be empty");
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "fps must be positive");
        self.fps = fps;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the launcher layout.
    pub fn with_launchers(mut self, launchers: Vec<LauncherSpec>) -> Self {
        self.launchers = launchers;
        self
    }

    pub fn with_launcher(mut self, launcher: LauncherConfig) -> Self {
        self.launcher = launcher;
        self
    }

    /// Y coordinate of every launch pad: flush with the bottom edge.
    pub fn pad_y(&self) -> f32 {
        self.height.saturating_sub(self.launcher.height) as f32
    }
}
