//! Camera state and directional movement.
//!
//! The camera is described by two offsets: `depth` (eye z) and `lateral` (eye x). It always
//! looks straight down the river toward a fixed depth, so moving sideways pans the view
//! rather than turning it.
//!
//! # Coordinate System
//!
//! - X-axis: lateral, positive to the right
//! - Y-axis: up
//! - Z-axis: toward the viewer; moving forward decreases depth

use crate::config::SceneConfig;
use crate::math::mat::Mat4;
use crate::math::vec::Vec3;

/// A single directional camera intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMove {
    Forward,
    Backward,
    Left,
    Right,
}

/// Viewpoint controlled by discrete directional input.
///
/// Offsets accumulate without bound; there is no clamping of the camera range.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye z position.
    pub depth: f32,
    /// Eye x position.
    pub lateral: f32,
    /// Distance moved per intent.
    pub step: f32,
    /// Eye height above the water.
    pub eye_height: f32,
    /// Depth of the look-at point.
    pub look_at_depth: f32,
}

impl Camera {
    /// Creates a camera at the configured starting viewpoint.
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            depth: config.camera_start_depth,
            lateral: config.camera_start_lateral,
            step: config.camera_step,
            eye_height: config.camera_eye_height,
            look_at_depth: config.camera_look_at_depth,
        }
    }

    pub fn move_forward(&mut self) {
        self.depth -= self.step;
    }

    pub fn move_backward(&mut self) {
        self.depth += self.step;
    }

    pub fn move_left(&mut self) {
        self.lateral -= self.step;
    }

    pub fn move_right(&mut self) {
        self.lateral += self.step;
    }

    /// Applies one directional intent.
    pub fn apply(&mut self, movement: CameraMove) {
        match movement {
            CameraMove::Forward => self.move_forward(),
            CameraMove::Backward => self.move_backward(),
            CameraMove::Left => self.move_left(),
            CameraMove::Right => self.move_right(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.lateral, self.eye_height, self.depth)
    }

    pub fn target(&self) -> Vec3 {
        Vec3::new(self.lateral, 0.0, self.look_at_depth)
    }

    /// World-to-view transform for the current offsets.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye(), self.target(), Vec3::new(0.0, 1.0, 0.0))
    }
}
