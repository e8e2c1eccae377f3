//! Column-major 4x4 matrices.
//!
//! `Mat4.0[c][r]` is column `c`, row `r`, matching the WGSL `mat4x4<f32>` layout so a
//! matrix can be uploaded with [`bytemuck`] as-is. Matrices act on column vectors:
//! `a.multiply(&b)` applies `b` first, then `a`.

use crate::math::vec::Vec3;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    pub fn identity() -> Mat4 {
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed perspective projection with depth mapped to `[0, 1]`.
    pub fn perspective(
        field_of_view_y_in_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Mat4 {
        let f = 1.0 / (field_of_view_y_in_radians * 0.5).tan();
        let range_reciprocal = 1.0 / (z_near - z_far);

        Mat4([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, z_far * range_reciprocal, -1.0],
            [0.0, 0.0, z_far * z_near * range_reciprocal, 0.0],
        ])
    }

    /// View matrix placing the camera at `eye`, looking at `target`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let side = forward.cross(&up).normalize();
        let up = side.cross(&forward);

        Mat4([
            [side.x(), up.x(), -forward.x(), 0.0],
            [side.y(), up.y(), -forward.y(), 0.0],
            [side.z(), up.z(), -forward.z(), 0.0],
            [-side.dot(&eye), -up.dot(&eye), forward.dot(&eye), 1.0],
        ])
    }

    pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, tz, 1.0],
        ])
    }

    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
        Mat4([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn multiply(&self, b: &Mat4) -> Mat4 {
        let mut result = [[0.0; 4]; 4];
        for (i, column) in result.iter_mut().enumerate() {
            for (j, cell) in column.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.0[k][j] * b.0[i][k]).sum();
            }
        }
        Mat4(result)
    }

    /// Applies the affine part of the matrix to a point (w assumed to stay 1).
    pub fn transform_point(&self, point: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        let mut out = [0.0; 3];
        for (r, value) in out.iter_mut().enumerate() {
            *value = m[0][r] * point[0] + m[1][r] * point[1] + m[2][r] * point[2] + m[3][r];
        }
        out
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(matrix: Mat4) -> Self {
        matrix.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::deg_to_rad;

    /// Full homogeneous transform followed by the perspective divide.
    fn project(m: &Mat4, point: [f32; 3]) -> [f32; 3] {
        let c = &m.0;
        let w = c[0][3] * point[0] + c[1][3] * point[1] + c[2][3] * point[2] + c[3][3];
        let [x, y, z] = m.transform_point(point);
        [x / w, y / w, z / w]
    }

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-4, "{:?} != {:?}", a, b);
        }
    }

    /// Translation applied after scaling moves the scaled point.
    #[test]
    fn test_multiply_applies_right_operand_first() {
        let m = Mat4::translation(10.0, 0.0, -5.0).multiply(&Mat4::scaling(2.0, 3.0, 1.0));
        assert_close(m.transform_point([1.0, 1.0, 1.0]), [12.0, 3.0, -4.0]);
    }

    #[test]
    fn test_identity_is_neutral() {
        let t = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(t.multiply(&Mat4::identity()), t);
        assert_eq!(Mat4::identity().multiply(&t), t);
    }

    /// Points on the near and far planes land on depth 0 and 1.
    #[test]
    fn test_perspective_depth_range() {
        let p = Mat4::perspective(deg_to_rad(70.0), 1.0, 1.0, 1000.0);
        assert!(project(&p, [0.0, 0.0, -1.0])[2].abs() < 1e-5);
        assert!((project(&p, [0.0, 0.0, -1000.0])[2] - 1.0).abs() < 1e-5);
    }

    /// The eye maps to the origin and the target lies straight ahead on -Z.
    #[test]
    fn test_look_at_centers_target() {
        let eye = Vec3::new(0.0, 30.0, 250.0);
        let target = Vec3::new(0.0, 0.0, -100.0);
        let view = Mat4::look_at(eye, target, Vec3::new(0.0, 1.0, 0.0));

        assert_close(view.transform_point([0.0, 30.0, 250.0]), [0.0, 0.0, 0.0]);
        let ahead = view.transform_point([0.0, 0.0, -100.0]);
        assert!(ahead[0].abs() < 1e-4 && ahead[1].abs() < 1e-3);
        assert!(ahead[2] < 0.0);
    }
}
