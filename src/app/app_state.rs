//! AppState module.
//!
//! This module defines the [`AppState`] struct, which holds everything created once the
//! window exists: the renderer, the scene and the tick scheduler.

use crate::app::error::AppError;
use crate::app::scheduler::FrameScheduler;
use crate::config::SceneConfig;
use crate::renderer::wgpu_lib::WgpuRenderer;
use crate::scene::{SceneEvents, SceneState};
use std::time::Instant;

/// Holds all state required for a running scene.
pub struct AppState {
    /// The WGPU renderer for the scene.
    pub wgpu_renderer: WgpuRenderer,
    /// Actors, camera and projection.
    pub scene_state: SceneState,
    /// Decides when the next motion tick is due.
    pub scheduler: FrameScheduler,
}

impl AppState {
    /// Asynchronously creates a new [`AppState`] with an initialized renderer and a
    /// populated scene.
    ///
    /// # Arguments
    /// - `instance`: The WGPU instance.
    /// - `surface`: The WGPU surface for rendering.
    /// - `width`, `height`: Initial drawable size in physical pixels.
    /// - `config`: Scene tunables.
    /// - `seed`: Seed for fish and bird sampling.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
        config: &SceneConfig,
        seed: u64,
    ) -> Result<Self, AppError> {
        let wgpu_renderer = WgpuRenderer::new(instance, surface, width, height, config).await?;
        let scene_state = SceneState::new(config, seed, width, height);
        let scheduler = FrameScheduler::new(config.tick_interval, Instant::now());

        Ok(Self {
            wgpu_renderer,
            scene_state,
            scheduler,
        })
    }

    /// Applies a new drawable size to both the surface and the projection.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.wgpu_renderer.resize(width, height);
        self.scene_state.on_resize(width, height);
    }
}
