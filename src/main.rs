//! River Scene - an animated 3D river and beach
//!
//! A boat sails along a river under a sky of clouds and birds while a school of fish swims
//! below the surface. The camera can be moved with `W`, `A`, `S` and `D`; the left mouse button
//! starts the boat and the right one stops it.
//!
//! # Architecture
//! - `app/`: Window lifecycle, event routing and tick scheduling
//! - `scene/`: Actors, motion rules, camera and input mapping
//! - `renderer/`: Geometry assembly and the WGPU pipelines
//! - `math/`: Vector and matrix utilities for 3D graphics
//! - `config`: Startup tunables
//!
//! # Usage
//! Run the application with `cargo run`. Set `RUST_LOG=debug` for per-event logging.

pub mod app;
pub mod config;
pub mod math;
pub mod renderer;
pub mod scene;

use app::{App, AppError};
use config::SceneConfig;
use std::process::ExitCode;
use winit::event_loop::EventLoop;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Fatal: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Creates the event loop and runs the scene until the window is closed.
///
/// # Errors
/// Returns the first fatal error raised while starting up or rendering.
fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;

    let seed = scene::init::wall_clock_seed();
    let mut app = App::new(SceneConfig::default(), seed);

    event_loop
        .run_app(&mut app)
        .map_err(AppError::EventLoopRun)?;

    match app.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
