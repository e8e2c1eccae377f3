//! Math utilities for the scene camera and renderer.
//!
//! This module provides matrix and vector types compatible with GPU memory layouts
//! (for use as WGSL uniforms), plus angle conversion.
//!
//! # Module Organization
//!
//! - [`vec`] contains [`vec::Vec3`] and its operators
//! - [`mat`] contains [`mat::Mat4`] with projection and view construction

pub mod mat;
pub mod vec;

/// Converts degrees to radians.
///
/// This handles angle wrapping by first normalizing the input to the range [0, 360).
///
/// # Example
/// ```ignore
/// assert_eq!(deg_to_rad(180.0), std::f32::consts::PI);
/// assert_eq!(deg_to_rad(540.0), std::f32::consts::PI);
/// ```
pub fn deg_to_rad(degrees: f32) -> f32 {
    (degrees % 360.0) * (std::f32::consts::PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_to_rad_wraps() {
        assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((deg_to_rad(540.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((deg_to_rad(70.0) - 1.221_730_5).abs() < 1e-6);
    }
}
