//! Error types for skyburst.
//!
//! Construction of the windowed backend is the only thing that can fail:
//! once a show is running, every operation is in-memory arithmetic and
//! drawing, neither of which has a failure path.

use std::fmt;

/// Errors that can occur while setting up the GPU canvas.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for the window.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create the GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running a windowed show.
#[derive(Debug)]
pub enum ShowError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU canvas setup failed.
    Gpu(GpuError),
}

impl fmt::Display for ShowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            ShowError::Window(e) => write!(f, "Failed to create window: {}", e),
            ShowError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for ShowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShowError::EventLoop(e) => Some(e),
            ShowError::Window(e) => Some(e),
            ShowError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for ShowError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ShowError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for ShowError {
    fn from(e: winit::error::OsError) -> Self {
        ShowError::Window(e)
    }
}

impl From<GpuError> for ShowError {
    fn from(e: GpuError) -> Self {
        ShowError::Gpu(e)
    }
}
