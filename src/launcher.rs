//! Fixed launch pads that fire bursts on a timer.

use glam::Vec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::burst::Burst;
use crate::canvas::Canvas;
use crate::color::random_color;
use crate::config::LauncherConfig;
use crate::particle::Bounds;

/// A launch pad firing a burst every `period_ms` milliseconds.
///
/// The pad owns its bursts: it advances them and drops them once spent.
/// The timer resets to the actual tick time on each launch, so a stalled
/// frame never queues catch-up launches.
#[derive(Debug, Clone)]
pub struct Launcher {
    position: Vec2,
    period_ms: u64,
    last_launch: Option<u64>,
    bursts: Vec<Burst>,
    config: LauncherConfig,
}

impl Launcher {
    /// Create a pad with its top-left corner at `position`.
    ///
    /// A new pad has never fired, so its first tick launches immediately.
    /// Use [`Launcher::arm`] to delay the first launch by one period.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`LauncherConfig::validate`].
    pub fn new(position: Vec2, period_ms: u64, config: LauncherConfig) -> Self {
        config.validate();
        Self {
            position,
            period_ms,
            last_launch: None,
            bursts: Vec::new(),
            config,
        }
    }

    /// Start the timer at `now` without launching.
    pub fn arm(&mut self, now: u64) {
        self.last_launch = Some(now);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    #[inline]
    pub fn last_launch(&self) -> Option<u64> {
        self.last_launch
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    /// Total particles across every owned burst.
    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(|b| b.particles().len()).sum()
    }

    fn is_due(&self, now: u64) -> bool {
        match self.last_launch {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.period_ms,
        }
    }

    /// Launch if due, advance every burst, then drop the spent ones.
    pub fn tick<R: Rng + ?Sized>(&mut self, bounds: Bounds, now: u64, rng: &mut R) {
        if self.is_due(now) {
            self.launch(rng);
            self.last_launch = Some(now);
        }

        for burst in &mut self.bursts {
            burst.advance(bounds, rng);
        }

        let before = self.bursts.len();
        self.bursts.retain(|b| !b.is_spent());
        let dropped = before - self.bursts.len();
        if dropped > 0 {
            trace!(x = self.position.x, dropped, "spent bursts removed");
        }
    }

    fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let altitude = rng.gen_range(self.config.min_altitude..self.config.max_altitude) as f32;
        let origin = Vec2::new(
            self.position.x + self.config.width as f32 / 2.0,
            self.position.y,
        );
        debug!(x = origin.x, altitude, "launching burst");

        self.bursts.push(Burst::new(
            origin,
            self.config.ascent_velocity,
            altitude,
            random_color(rng),
            self.config.burst,
        ));
    }

    /// Draw the pad, then every burst it owns.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(
            self.position.x as i32,
            self.position.y as i32,
            self.config.width,
            self.config.height,
            self.config.color,
            u8::MAX,
        );

        for burst in &self.bursts {
            burst.render(canvas);
        }
    }
}
