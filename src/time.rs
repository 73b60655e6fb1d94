//! Time sources and frame pacing.
//!
//! Launchers read time through the [`Clock`] trait so that cadence can be
//! driven by a [`ManualClock`] in tests. The main loop caps its rate with a
//! [`FrameLimiter`], which also keeps a running FPS estimate.
//!
//! # Example
//!
//! ```ignore
//! use fireworks::time::{Clock, FrameLimiter, SystemClock};
//!
//! let clock = SystemClock::new();
//! let mut limiter = FrameLimiter::new(60);
//!
//! loop {
//!     limiter.wait();
//!     println!("t = {} ms, fps = {:.1}", clock.now_ms(), limiter.fps());
//! }
//! ```

use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

/// Millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn now_ms(&self) -> u64;
}

/// Monotonic wall clock counting from its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Sleeps just long enough to cap the loop at a target rate.
///
/// Like a game-loop tick clock: each call to [`wait`](Self::wait) blocks
/// until one frame interval has passed since the previous call returned.
/// A frame that already overran its interval does not sleep, and the
/// lost time is not made up later.
#[derive(Debug)]
pub struct FrameLimiter {
    /// Target interval between frames.
    frame_interval: Duration,
    /// When the previous `wait` returned.
    last_frame: Instant,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameLimiter {
    /// Create a limiter for `fps` frames per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is zero.
    pub fn new(fps: u32) -> Self {
        assert!(fps > 0, "frame rate must be positive");
        let now = Instant::now();
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / fps as f64),
            last_frame: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Block until the next frame is due. Returns the time since the
    /// previous frame.
    pub fn wait(&mut self) -> Duration {
        let target = self.last_frame + self.frame_interval;
        let now = Instant::now();
        if target > now {
            thread::sleep(target - now);
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        delta
    }

    /// Target interval between frames.
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Whether the FPS estimate changed on the last `wait`.
    #[inline]
    pub fn fps_updated(&self) -> bool {
        self.fps_update_time == self.last_frame && self.frame_count > 0
    }
}
