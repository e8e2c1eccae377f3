//! Application module for the river scene.
//!
//! This module glues the windowing system to the scene model and the renderer.
//!
//! # Module Structure
//!
//! - [`app_state`]: Contains the [`AppState`] struct which holds everything alive after startup
//! - [`event_handler`]: Contains the [`App`] struct and the winit event routing
//! - [`update`]: Contains the tick and redraw logic
//! - [`scheduler`]: Fixed-cadence tick timing
//! - [`error`]: Fatal startup and runtime errors
//!
//! # Event Flow
//!
//! 1. **Input Events**: Key presses and mouse buttons are forwarded to the scene as they arrive
//! 2. **Ticks**: The event loop sleeps until the scheduler deadline, then advances the scene once
//! 3. **Rendering**: Every input or tick requests a redraw of the current state
//!
//! # Threading Model
//!
//! Everything runs on the event-loop thread. Ticks and input never overlap.

pub mod app_state;
pub mod error;
pub mod event_handler;
pub mod scheduler;
pub mod update;

pub use app_state::AppState;
pub use error::AppError;
pub use event_handler::App;
