use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

use crate::backend::Backend;
use crate::canvas::PixelBuffer;
use crate::config::SceneConfig;
use crate::error::{GpuError, SimulationError};
use crate::gpu::GpuState;
use crate::time::{Clock, FrameLimiter, SystemClock};

/// Window-side state driven by the event loop.
struct WindowHost {
    title: String,
    width: u32,
    height: u32,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    quit_requested: bool,
    error: Option<SimulationError>,
}

impl WindowHost {
    fn new(config: &SceneConfig) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            window: None,
            gpu_state: None,
            quit_requested: false,
            error: None,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());
        self.gpu_state = Some(pollster::block_on(GpuState::new(
            window,
            self.width,
            self.height,
        ))?);
        info!(width = self.width, height = self.height, "window opened");
        Ok(())
    }
}

impl ApplicationHandler for WindowHost {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.open(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.quit_requested = true;
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.quit_requested = true;
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            _ => {}
        }
    }
}

/// Desktop [`Backend`]: a fixed-size winit window presenting through wgpu.
///
/// Events are pumped once per frame instead of handing control to the event
/// loop, so the scene keeps its own fixed-step loop. Closing the window or
/// pressing Escape requests quit.
pub struct WindowBackend {
    event_loop: EventLoop<()>,
    host: WindowHost,
    clock: SystemClock,
    limiter: FrameLimiter,
}

impl WindowBackend {
    /// Open the window and bring up the GPU.
    pub fn new(config: &SceneConfig) -> Result<Self, SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut backend = Self {
            event_loop,
            host: WindowHost::new(config),
            clock: SystemClock::new(),
            limiter: FrameLimiter::new(config.fps),
        };
        // The first pump delivers `resumed`, which creates the window.
        backend.pump()?;
        Ok(backend)
    }

    fn pump(&mut self) -> Result<bool, SimulationError> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.host);
        if let Some(e) = self.host.error.take() {
            return Err(e);
        }
        Ok(self.host.quit_requested || matches!(status, PumpStatus::Exit(_)))
    }

    fn update_title(&self) {
        if let Some(window) = &self.host.window {
            window.set_title(&format!("{} - {:.0} FPS", self.host.title, self.limiter.fps()));
        }
    }
}

impl Backend for WindowBackend {
    fn wait_frame(&mut self) {
        self.limiter.wait();
        if self.limiter.fps_updated() {
            self.update_title();
        }
    }

    fn poll_quit(&mut self) -> Result<bool, SimulationError> {
        self.pump()
    }

    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), SimulationError> {
        let gpu_state = self
            .host
            .gpu_state
            .as_mut()
            .ok_or(SimulationError::WindowClosed)?;

        match gpu_state.present(frame) {
            Ok(()) => Ok(()),
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                warn!("surface {:?}, reconfiguring", e);
                gpu_state.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("surface timed out, dropping frame");
                Ok(())
            }
            Err(e) => Err(GpuError::Surface(e).into()),
        }
    }
}
