//! Error types for the window and GPU presentation layer.
//!
//! The simulation itself cannot fail. Everything here comes from creating
//! the window, bringing up the GPU, or presenting a frame, and is fatal to
//! the run.

use thiserror::Error;

/// Errors that can occur while bringing up or using the GPU.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,
    /// The surface reports no texture format the adapter can render to.
    #[error("The window surface offers no supported texture format")]
    NoSurfaceFormat,
    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    /// The surface failed in a way that reconfiguring cannot fix.
    #[error("Failed to present frame: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Errors that can occur when running a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Failed to create event loop.
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization or presentation failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    /// A frame was presented but no window is open.
    #[error("No window is open to present to")]
    WindowClosed,
}
