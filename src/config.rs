//! Tunable constants for the river scene.
//!
//! [`SceneConfig`] gathers every value the window, camera, projection and boat need at startup.
//! Nothing is read from disk or the command line; [`SceneConfig::default`] is the only source.

use std::time::Duration;

/// Startup configuration for the scene and its host window.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Title shown in the window decoration.
    pub window_title: String,
    /// Initial inner width in logical pixels.
    pub window_width: u32,
    /// Initial inner height in logical pixels.
    pub window_height: u32,
    /// Delay between two motion ticks.
    pub tick_interval: Duration,
    /// Distance the camera travels per directional intent.
    pub camera_step: f32,
    /// Starting camera depth (eye z).
    pub camera_start_depth: f32,
    /// Starting camera lateral offset (eye x).
    pub camera_start_lateral: f32,
    /// Eye height above the water plane.
    pub camera_eye_height: f32,
    /// Depth of the point the camera looks at.
    pub camera_look_at_depth: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub z_near: f32,
    /// Far clipping plane.
    pub z_far: f32,
    /// Boat x position at startup.
    pub boat_start_x: f32,
    /// Distance the boat travels per tick while moving.
    pub boat_speed: f32,
    /// Background color (RGBA).
    pub clear_color: [f64; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window_title: "River Scene - Boat and Clouds".to_string(),
            window_width: 1000,
            window_height: 700,
            tick_interval: Duration::from_millis(16),
            camera_step: 5.0,
            camera_start_depth: 250.0,
            camera_start_lateral: 0.0,
            camera_eye_height: 30.0,
            camera_look_at_depth: -100.0,
            fov_degrees: 70.0,
            z_near: 1.0,
            z_far: 1000.0,
            boat_start_x: -300.0,
            boat_speed: 0.2,
            clear_color: [1.0, 0.85, 0.4, 1.0],
        }
    }
}
