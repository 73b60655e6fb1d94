//! The windowing collaborator the main loop runs against.
//!
//! A [`Backend`] supplies everything outside the simulation: frame pacing,
//! the quit signal, the time source and presentation of finished frames.
//! [`WindowBackend`](crate::WindowBackend) opens a real window; the
//! [`HeadlessBackend`] here runs on a simulated clock for tests and
//! benchmarks.

use crate::canvas::PixelBuffer;
use crate::error::SimulationError;
use crate::time::{Clock, ManualClock};

/// Host services for [`Scene::run`](crate::Scene::run).
pub trait Backend {
    /// Block until the next frame is due.
    fn wait_frame(&mut self);

    /// Drain pending events. Returns `true` once quit has been requested.
    fn poll_quit(&mut self) -> Result<bool, SimulationError>;

    /// Current time in milliseconds.
    fn now_ms(&self) -> u64;

    /// Show a finished frame.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), SimulationError>;
}

/// Backend with no window and a simulated clock.
///
/// Each `wait_frame` advances the clock by a fixed step without sleeping.
/// Quit is signalled on the `max_frames`-th poll.
#[derive(Debug)]
pub struct HeadlessBackend {
    clock: ManualClock,
    frame_step_ms: u64,
    max_frames: u64,
    polls: u64,
    presented: u64,
    last_frame: Option<PixelBuffer>,
}

impl HeadlessBackend {
    pub fn new(frame_step_ms: u64, max_frames: u64) -> Self {
        Self {
            clock: ManualClock::new(0),
            frame_step_ms,
            max_frames,
            polls: 0,
            presented: 0,
            last_frame: None,
        }
    }

    /// Roughly 60 Hz: 16 ms per frame.
    pub fn sixty_hz(max_frames: u64) -> Self {
        Self::new(16, max_frames)
    }

    /// Frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&PixelBuffer> {
        self.last_frame.as_ref()
    }
}

impl Backend for HeadlessBackend {
    fn wait_frame(&mut self) {
        self.clock.advance(self.frame_step_ms);
    }

    fn poll_quit(&mut self) -> Result<bool, SimulationError> {
        self.polls += 1;
        Ok(self.polls >= self.max_frames)
    }

    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), SimulationError> {
        self.presented += 1;
        match &mut self.last_frame {
            Some(last) => last.clone_from(frame),
            None => self.last_frame = Some(frame.clone()),
        }
        Ok(())
    }
}
