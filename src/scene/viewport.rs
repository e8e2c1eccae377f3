//! Projection derived from the window size.

use crate::config::SceneConfig;
use crate::math::deg_to_rad;
use crate::math::mat::Mat4;

/// Perspective projection for a given window size.
///
/// A pure function of `(width, height)` and the configured lens; a zero height is treated
/// as one so the aspect ratio stays finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: u32,
    /// Effective height, never zero.
    pub height: u32,
    pub aspect: f32,
    pub matrix: Mat4,
}

impl Projection {
    pub fn new(width: u32, height: u32, config: &SceneConfig) -> Self {
        let height = height.max(1);
        let aspect = width as f32 / height as f32;
        let matrix = Mat4::perspective(
            deg_to_rad(config.fov_degrees),
            aspect,
            config.z_near,
            config.z_far,
        );
        Self {
            width,
            height,
            aspect,
            matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A zero-height window is clamped to one pixel instead of dividing by zero.
    #[test]
    fn test_zero_height_clamped() {
        let projection = Projection::new(800, 0, &SceneConfig::default());
        assert_eq!(projection.height, 1);
        assert_eq!(projection.aspect, 800.0);
        assert!(projection.matrix.0.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_aspect_ratio() {
        let projection = Projection::new(1000, 700, &SceneConfig::default());
        assert!((projection.aspect - 1000.0 / 700.0).abs() < 1e-6);
        let f = 1.0 / (deg_to_rad(70.0) * 0.5).tan();
        assert!((projection.matrix.0[1][1] - f).abs() < 1e-5);
        assert!((projection.matrix.0[0][0] - f / projection.aspect).abs() < 1e-5);
    }
}
