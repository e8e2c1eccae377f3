//! CPU tessellation of the primitive shapes the scene is built from.
//!
//! Every `push_*` call takes a model matrix and writes world-space vertices, so the GPU only
//! ever applies the shared view-projection transform. Filled shapes go to
//! [`MeshBuilder::triangles`] as a triangle list; strokes go to [`MeshBuilder::lines`] as a
//! line list.

use crate::math::mat::Mat4;
use crate::renderer::vertex::Vertex;
use std::f32::consts::PI;

#[derive(Debug, Default, Clone)]
pub struct MeshBuilder {
    /// Filled geometry, three vertices per triangle.
    pub triangles: Vec<Vertex>,
    /// Stroked geometry, two vertices per segment.
    pub lines: Vec<Vertex>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties both streams while keeping their allocations.
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    pub fn push_triangle(&mut self, model: &Mat4, corners: [[f32; 3]; 3], color: [u8; 4]) {
        for corner in corners {
            self.triangles
                .push(Vertex::new(model.transform_point(corner), color));
        }
    }

    /// Pushes a planar quad given in winding order as two triangles.
    pub fn push_quad(&mut self, model: &Mat4, corners: [[f32; 3]; 4], color: [u8; 4]) {
        let [a, b, c, d] = corners;
        self.push_triangle(model, [a, b, c], color);
        self.push_triangle(model, [a, c, d], color);
    }

    /// Expands a triangle strip into a triangle list.
    pub fn push_triangle_strip(&mut self, model: &Mat4, strip: &[[f32; 3]], color: [u8; 4]) {
        for window in strip.windows(3) {
            self.push_triangle(model, [window[0], window[1], window[2]], color);
        }
    }

    pub fn push_line(&mut self, model: &Mat4, from: [f32; 3], to: [f32; 3], color: [u8; 4]) {
        self.lines
            .push(Vertex::new(model.transform_point(from), color));
        self.lines.push(Vertex::new(model.transform_point(to), color));
    }

    /// Pushes a UV sphere centred on the model origin.
    ///
    /// `slices` divide the longitude and `stacks` the latitude. The pole rows collapse to a
    /// point, so each pole contributes one triangle per slice.
    pub fn push_sphere(
        &mut self,
        model: &Mat4,
        radius: f32,
        slices: u32,
        stacks: u32,
        color: [u8; 4],
    ) {
        let slices = slices.max(3);
        let stacks = stacks.max(2);

        let point = |slice: u32, stack: u32| -> [f32; 3] {
            let phi = PI * stack as f32 / stacks as f32;
            let theta = 2.0 * PI * slice as f32 / slices as f32;
            [
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ]
        };

        for stack in 0..stacks {
            for slice in 0..slices {
                let top_left = point(slice, stack);
                let top_right = point(slice + 1, stack);
                let bottom_left = point(slice, stack + 1);
                let bottom_right = point(slice + 1, stack + 1);

                if stack != 0 {
                    self.push_triangle(model, [top_left, top_right, bottom_right], color);
                }
                if stack != stacks - 1 {
                    self.push_triangle(model, [top_left, bottom_right, bottom_left], color);
                }
            }
        }
    }
}

/// Number of triangles [`MeshBuilder::push_sphere`] emits for the given tessellation.
#[cfg(test)]
pub fn sphere_triangle_count(slices: u32, stacks: u32) -> usize {
    let slices = slices.max(3) as usize;
    let stacks = stacks.max(2) as usize;
    slices * (2 * stacks - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::rgb;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn test_quad_is_two_triangles() {
        let mut mesh = MeshBuilder::new();
        mesh.push_quad(
            &Mat4::identity(),
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            WHITE,
        );
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles[3].position, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.triangles[5].position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_strip_expands_to_list() {
        let mut mesh = MeshBuilder::new();
        let strip = [[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [0.0, 2.0, 0.0]];
        mesh.push_triangle_strip(&Mat4::identity(), &strip, WHITE);
        assert_eq!(mesh.triangle_count(), 3);

        mesh.clear();
        mesh.push_triangle_strip(&Mat4::identity(), &strip[..2], WHITE);
        assert!(mesh.triangles.is_empty());
    }

    /// Tests that the model transform is applied to each vertex.
    #[test]
    fn test_model_transform_applied() {
        let mut mesh = MeshBuilder::new();
        let model = Mat4::translation(10.0, 0.0, -5.0).multiply(&Mat4::scaling(2.0, 2.0, 2.0));
        mesh.push_line(&model, [0.0, 0.0, 0.0], [1.0, 1.0, 0.0], rgb(0.1, 0.1, 0.1));
        assert_eq!(mesh.line_count(), 1);
        assert_eq!(mesh.lines[0].position, [10.0, 0.0, -5.0]);
        assert_eq!(mesh.lines[1].position, [12.0, 2.0, -5.0]);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let mut mesh = MeshBuilder::new();
        let model = Mat4::translation(300.0, 200.0, -280.0);
        mesh.push_sphere(&model, 18.0, 30, 30, WHITE);
        assert_eq!(mesh.triangle_count(), sphere_triangle_count(30, 30));
        for vertex in &mesh.triangles {
            let [x, y, z] = vertex.position;
            let distance = ((x - 300.0).powi(2) + (y - 200.0).powi(2) + (z + 280.0).powi(2)).sqrt();
            assert!((distance - 18.0).abs() < 1e-3, "vertex off surface: {distance}");
        }
    }
}
