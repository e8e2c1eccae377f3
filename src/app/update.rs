//! Update logic for the App.
//!
//! Contains the tick and redraw methods for the [`App`] struct.

use crate::app::error::AppError;
use crate::scene::SceneEvents;
use std::time::Instant;

use super::event_handler::App;

impl App {
    /// Advances the scene if a tick is due and returns the next deadline.
    ///
    /// Returns `None` before the window and state exist.
    pub fn handle_tick(&mut self) -> Option<Instant> {
        let state = self.state.as_mut()?;
        let now = Instant::now();
        if state.scheduler.poll(now) {
            state.scene_state.on_tick();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        Some(state.scheduler.deadline())
    }

    /// Draws the current scene.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped. A timeout also skips
    /// the frame. Running out of GPU memory is fatal.
    pub fn handle_redraw(&mut self) -> Result<(), AppError> {
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        if let Some(window) = &self.window {
            if window.is_minimized().unwrap_or(false) {
                return Ok(());
            }
        }

        match state.wgpu_renderer.render(&state.scene_state) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                state.wgpu_renderer.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(AppError::OutOfMemory),
            Err(err) => {
                log::warn!("Skipping frame: {}", err);
                Ok(())
            }
        }
    }
}
