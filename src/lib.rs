//! # Fireworks
//!
//! A fixed-timestep fireworks animation. Launch pads along the bottom of
//! the canvas fire shells on a timer; each shell climbs to a random altitude
//! and bursts into a ring or a star of fading sparks.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fireworks::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     let config = SceneConfig::default();
//!     let mut backend = WindowBackend::new(&config)?;
//!     Scene::new(config).run(&mut backend)
//! }
//! ```
//!
//! ## Core Concepts
//!
//! The scene is a strict ownership tree, stepped top-down once per frame:
//!
//! | Entity | Owns | Per tick |
//! |--------|------|----------|
//! | [`Scene`] | launchers, RNG, canvas bounds | ticks every launcher |
//! | [`Launcher`] | bursts | fires when due, advances bursts, drops spent ones |
//! | [`Burst`] | particles | climbs, detonates once, culls particles off-canvas |
//! | [`Particle`] | nothing | moves, fades |
//!
//! Rendering walks the same tree into a [`Canvas`].
//!
//! ## Determinism
//!
//! Every random draw goes through the scene's seedable RNG
//! ([`SceneConfig::with_seed`]), and time comes from the [`Backend`], so a
//! run on the [`HeadlessBackend`] is fully reproducible.
//!
//! ## Patterns
//!
//! | Pattern | Description |
//! |---------|-------------|
//! | [`Pattern::Radial`] | 25–50 sparks evenly spaced around a circle |
//! | [`Pattern::Star`] | 32 sparks on 8 rays, 4 speeds per ray |
//!
//! Pin one with [`BurstConfig::with_pattern`] and [`PatternMode::Fixed`].

pub mod backend;
mod burst;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
mod gpu;
mod launcher;
mod particle;
pub mod pattern;
mod scene;
mod shader;
pub mod time;
mod window;

pub use backend::{Backend, HeadlessBackend};
pub use burst::{Burst, BurstState};
pub use canvas::{Canvas, DrawCommand, DrawList, PixelBuffer};
pub use color::{Rgb, PALETTE};
pub use config::{BurstConfig, LauncherConfig, LauncherSpec, ParticleConfig, SceneConfig};
pub use error::{GpuError, SimulationError};
pub use glam::Vec2;
pub use launcher::Launcher;
pub use particle::{Bounds, Particle};
pub use pattern::{Pattern, PatternMode};
pub use scene::Scene;
pub use window::WindowBackend;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use fireworks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::{Backend, HeadlessBackend};
    pub use crate::canvas::{Canvas, PixelBuffer};
    pub use crate::color::Rgb;
    pub use crate::config::{BurstConfig, LauncherConfig, LauncherSpec, ParticleConfig, SceneConfig};
    pub use crate::error::SimulationError;
    pub use crate::pattern::{Pattern, PatternMode};
    pub use crate::scene::Scene;
    pub use crate::time::{Clock, ManualClock, SystemClock};
    pub use crate::window::WindowBackend;
    pub use crate::Vec2;
}
