//! Vertex definitions for scene geometry.
//!
//! This module provides the [`Vertex`] struct, which describes the layout of vertex data for the
//! renderer. Positions are already in world space; the only per-frame uniform is the
//! view-projection matrix.

/// Vertex data for all scene geometry.
///
/// Each vertex contains:
/// - `position`: 3D position in world space.
/// - `color`: RGBA color (as 4 normalized u8 values).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// 3D position in world space.
    pub position: [f32; 3],
    /// RGBA color (normalized 0-255).
    pub color: [u8; 4],
}

impl Vertex {
    pub fn new(position: [f32; 3], color: [u8; 4]) -> Self {
        Self { position, color }
    }

    /// Returns the vertex buffer layout for use in a wgpu pipeline.
    ///
    /// This describes the memory layout of [`Vertex`] for the GPU.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position (3 floats)
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Color (4 u8 bytes, interpreted as normalized floats in shader)
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Unorm8x4,
                },
            ],
        }
    }
}

/// Converts a float RGBA color in `[0, 1]` to the packed vertex format.
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> [u8; 4] {
    let pack = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [pack(r), pack(g), pack(b), pack(a)]
}

/// Opaque variant of [`rgba`].
pub fn rgb(r: f32, g: f32, b: f32) -> [u8; 4] {
    rgba(r, g, b, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 16);
    }

    #[test]
    fn test_color_packing_clamps() {
        assert_eq!(rgb(1.0, 0.0, 2.0), [255, 0, 255, 255]);
        assert_eq!(rgba(0.5, 0.5, 0.5, 0.25), [128, 128, 128, 64]);
    }
}
