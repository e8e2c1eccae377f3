//! Event handler module.
//!
//! Contains the [`App`] struct and its winit event handling.

use crate::app::app_state::AppState;
use crate::app::error::AppError;
use crate::config::SceneConfig;
use crate::scene::SceneEvents;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowId},
};

/// Main application struct that manages the window lifecycle and event routing.
///
/// # Lifecycle
/// 1. Created with [`App::new`], which initializes the WGPU instance
/// 2. The window is created on `resumed` and [`App::set_window`] builds the [`AppState`]
/// 3. Events are handled via the [`ApplicationHandler`] trait methods
/// 4. The application runs until the window is closed or a fatal error is stored
pub struct App {
    /// The WGPU instance for graphics operations.
    pub instance: wgpu::Instance,
    /// The current application state, None until initialized.
    pub state: Option<AppState>,
    /// The application window, None until set.
    pub window: Option<Arc<Window>>,
    config: SceneConfig,
    seed: u64,
    error: Option<AppError>,
}

impl App {
    /// Creates a new [`App`] with the default WGPU configuration.
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        Self {
            instance,
            state: None,
            window: None,
            config,
            seed,
            error: None,
        }
    }

    /// Takes the fatal error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<AppError> {
        self.error.take()
    }

    /// Creates the surface and the [`AppState`] for `window`.
    ///
    /// # Errors
    /// Fails if the surface, adapter, device or pipelines cannot be created.
    pub async fn set_window(&mut self, window: Window) -> Result<(), AppError> {
        let window = Arc::new(window);
        let size = window.inner_size();

        let surface = self.instance.create_surface(window.clone())?;
        let state = AppState::new(
            &self.instance,
            surface,
            size.width,
            size.height,
            &self.config,
            self.seed,
        )
        .await?;

        log::info!(
            "Scene ready at {}x{} (seed {})",
            size.width,
            size.height,
            self.seed
        );
        window.request_redraw();
        self.window.get_or_insert(window);
        self.state.get_or_insert(state);
        Ok(())
    }

    /// Records a fatal error and stops the event loop.
    pub(super) fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    /// Creates the window the first time the application is resumed.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(err) => {
                self.fail(event_loop, AppError::CreateWindow(err));
                return;
            }
        };

        if let Err(err) = pollster::block_on(self.set_window(window)) {
            self.fail(event_loop, err);
        }
    }

    /// Routes window events to the scene and the renderer.
    ///
    /// # Event Types Handled
    /// - **CloseRequested**: Exits the event loop
    /// - **Resized**: Reconfigures the surface and the projection
    /// - **KeyboardInput**: Camera movement on key press (repeats included)
    /// - **MouseInput**: Starts or stops the boat
    /// - **RedrawRequested**: Draws the current frame
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!(
                    "Close requested after {} ticks, exiting",
                    state.scheduler.ticks()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                state.resize_surface(size.width, size.height);
                self.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                state.scene_state.on_key(&logical_key);
                self.request_redraw();
            }
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                state.scene_state.on_button(button, button_state);
                self.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.handle_redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => (),
        }
    }

    /// Runs any due tick, then sleeps until the next one.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(deadline) = self.handle_tick() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}
