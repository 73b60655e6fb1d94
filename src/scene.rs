//! The scene: every launcher, the canvas bounds and the main loop.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::backend::Backend;
use crate::canvas::{Canvas, PixelBuffer};
use crate::color::Rgb;
use crate::config::SceneConfig;
use crate::error::SimulationError;
use crate::launcher::Launcher;
use crate::particle::Bounds;

/// Owns the launchers and the random source, and steps them frame by frame.
///
/// # Example
///
/// ```ignore
/// let config = SceneConfig::default();
/// let mut backend = WindowBackend::new(&config)?;
/// Scene::new(config).run(&mut backend)?;
/// ```
pub struct Scene {
    launchers: Vec<Launcher>,
    bounds: Bounds,
    background: Rgb,
    rng: SmallRng,
    seed: Option<u64>,
    frame: PixelBuffer,
    frame_count: u64,
}

impl Scene {
    /// Build the scene described by `config`.
    ///
    /// Every launcher sits on the bottom edge. With no seed configured the
    /// random source is seeded from entropy.
    ///
    /// # Panics
    ///
    /// Panics if `config.launcher` fails
    /// [`LauncherConfig::validate`](crate::LauncherConfig::validate), even
    /// when no launchers are placed.
    pub fn new(config: SceneConfig) -> Self {
        config.launcher.validate();
        let pad_y = config.pad_y();
        let launchers = config
            .launchers
            .iter()
            .map(|spec| Launcher::new(Vec2::new(spec.x, pad_y), spec.period_ms, config.launcher))
            .collect();

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            launchers,
            bounds: Bounds::new(config.width as f32, config.height as f32),
            background: config.background,
            rng,
            seed: config.seed,
            frame: PixelBuffer::new(config.width, config.height),
            frame_count: 0,
        }
    }

    pub fn launchers(&self) -> &[Launcher] {
        &self.launchers
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Frames stepped so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    pub fn burst_count(&self) -> usize {
        self.launchers.iter().map(|l| l.bursts().len()).sum()
    }

    pub fn particle_count(&self) -> usize {
        self.launchers.iter().map(|l| l.particle_count()).sum()
    }

    /// Start every launcher's timer at `now`, delaying each first launch by
    /// one period.
    pub fn arm(&mut self, now: u64) {
        for launcher in &mut self.launchers {
            launcher.arm(now);
        }
    }

    /// Advance every launcher by one frame.
    pub fn tick(&mut self, now: u64) {
        for launcher in &mut self.launchers {
            launcher.tick(self.bounds, now, &mut self.rng);
        }
        self.frame_count += 1;
    }

    /// Clear `canvas` and draw every launcher.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(self.background);
        for launcher in &self.launchers {
            launcher.render(canvas);
        }
    }

    /// Run until `backend` reports quit.
    ///
    /// Each iteration waits for the frame, polls events, ticks, renders and
    /// presents. The iteration that observes quit still completes. Backend
    /// errors end the run and are returned.
    pub fn run<B: Backend>(&mut self, backend: &mut B) -> Result<(), SimulationError> {
        self.arm(backend.now_ms());
        info!(
            width = self.bounds.width,
            height = self.bounds.height,
            launchers = self.launchers.len(),
            seed = ?self.seed,
            "simulation started"
        );

        loop {
            backend.wait_frame();
            let quit = backend.poll_quit()?;

            self.tick(backend.now_ms());

            let mut frame = std::mem::replace(&mut self.frame, PixelBuffer::new(0, 0));
            self.render(&mut frame);
            self.frame = frame;
            backend.present(&self.frame)?;

            if quit {
                break;
            }
        }

        info!(frames = self.frame_count, "simulation stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;
    use crate::canvas::{DrawCommand, DrawList};
    use crate::config::{LauncherConfig, LauncherSpec};

    fn seeded() -> SceneConfig {
        SceneConfig::default().with_seed(1234)
    }

    #[test]
    fn test_builds_launchers_on_bottom_edge() {
        let scene = Scene::new(seeded());
        let xs: Vec<f32> = scene.launchers().iter().map(|l| l.position().x).collect();
        assert_eq!(xs, vec![100.0, 300.0, 500.0, 700.0]);
        assert!(scene.launchers().iter().all(|l| l.position().y == 580.0));
        assert_eq!(scene.bounds(), Bounds::new(800.0, 600.0));
    }

    #[test]
    fn test_tick_reaches_every_launcher() {
        let mut scene = Scene::new(seeded());
        scene.tick(0);
        assert_eq!(scene.burst_count(), 4);
        assert_eq!(scene.frame_count(), 1);
    }

    #[test]
    fn test_armed_scene_follows_periods() {
        let mut scene = Scene::new(seeded());
        scene.arm(0);
        scene.tick(1999);
        assert_eq!(scene.burst_count(), 0);
        scene.tick(2000);
        assert_eq!(scene.burst_count(), 1);
        scene.tick(3000);
        assert_eq!(scene.burst_count(), 2);
    }

    #[test]
    fn test_render_clears_then_draws_pads() {
        let scene = Scene::new(seeded());
        let mut list = DrawList::new();
        scene.render(&mut list);
        assert_eq!(list.commands[0], DrawCommand::Clear(Rgb::BLACK));
        assert_eq!(list.rects().count(), 4);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let mut a = Scene::new(seeded());
        let mut b = Scene::new(seeded());
        for t in 0..300 {
            a.tick(t * 16);
            b.tick(t * 16);
        }
        assert_eq!(a.particle_count(), b.particle_count());

        let (mut da, mut db) = (DrawList::new(), DrawList::new());
        a.render(&mut da);
        b.render(&mut db);
        assert_eq!(da.commands, db.commands);
    }

    #[test]
    fn test_run_completes_quitting_iteration() {
        let config = seeded().with_launchers(vec![LauncherSpec::new(390.0, 100)]);
        let mut scene = Scene::new(config);
        let mut backend = HeadlessBackend::sixty_hz(10);
        scene.run(&mut backend).unwrap();
        assert_eq!(scene.frame_count(), 10);
        assert_eq!(backend.presented(), 10);
    }

    #[test]
    fn test_run_presents_rendered_frame() {
        let config = seeded().with_launchers(vec![LauncherSpec::new(390.0, 100)]);
        let mut scene = Scene::new(config);
        let mut backend = HeadlessBackend::sixty_hz(2);
        scene.run(&mut backend).unwrap();
        let frame = backend.last_frame().unwrap();
        assert_eq!(frame.pixel(395, 590), Some(Rgb::GREY));
        assert_eq!(frame.pixel(10, 10), Some(Rgb::BLACK));
    }

    #[test]
    #[should_panic(expected = "min_altitude must be below max_altitude")]
    fn test_literal_launcher_config_rejected_before_first_tick() {
        let mut config = seeded().with_launchers(Vec::new());
        config.launcher = LauncherConfig {
            min_altitude: 400,
            max_altitude: 50,
            ..LauncherConfig::default()
        };
        let _ = Scene::new(config);
    }
}
