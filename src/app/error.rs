//! Fatal application errors.
//!
//! Every variant describes a failure to bring up the window or the graphics context. These are
//! reported once from `main` and turn into a non-zero exit status.

use crate::renderer::pipeline_builder::MissingShader;
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no graphics adapter compatible with the window surface")]
    NoAdapter,
    #[error("failed to create graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("window surface reports no supported texture formats")]
    UnsupportedSurface,
    #[error(transparent)]
    Pipeline(#[from] MissingShader),
    #[error("graphics device ran out of memory")]
    OutOfMemory,
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}
