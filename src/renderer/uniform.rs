//! Per-frame shader constants.
//!
//! [`Uniforms`] carries the camera transform together with the exponent the vertex shader
//! raises vertex colours to. Both pipelines share one buffer bound at group 0.

use crate::math::mat::Mat4;
use wgpu::util::DeviceExt;

/// Gamma applied to sRGB-authored colours before they reach an sRGB surface.
const SRGB_GAMMA: f32 = 2.2;

/// Exponent that maps authored colours into the space `srgb_surface` expects.
///
/// An sRGB surface re-encodes on write, so colours are linearised first. Any other surface
/// stores what it is given.
pub fn color_exponent(srgb_surface: bool) -> f32 {
    if srgb_surface { SRGB_GAMMA } else { 1.0 }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color_exponent: f32,
    // WGSL rounds the struct up to 16 bytes
    _padding: [f32; 3],
}

impl Uniforms {
    pub fn new(view_proj: Mat4, srgb_surface: bool) -> Self {
        Self {
            view_proj: view_proj.into(),
            color_exponent: color_exponent(srgb_surface),
            _padding: [0.0; 3],
        }
    }

    pub fn set_view_proj(&mut self, view_proj: Mat4) {
        self.view_proj = view_proj.into();
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn create_buffer(&self, device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: self.as_bytes(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    }

    /// Creates the group 0 layout and a bind group exposing `buffer` to the vertex stage.
    pub fn create_bind_group(
        &self,
        buffer: &wgpu::Buffer,
        device: &wgpu::Device,
    ) -> (wgpu::BindGroup, wgpu::BindGroupLayout) {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<Self>() as wgpu::BufferAddress
                    ),
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_uniform_bind_group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        (bind_group, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the layout matches the WGSL struct: a mat4x4, an f32 and tail padding.
    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 80);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);

        let uniforms = Uniforms::new(Mat4::identity(), true);
        let bytes = uniforms.as_bytes();
        assert_eq!(&bytes[64..68], &SRGB_GAMMA.to_ne_bytes());
    }

    #[test]
    fn test_color_exponent_per_surface() {
        assert_eq!(color_exponent(true), SRGB_GAMMA);
        assert_eq!(color_exponent(false), 1.0);
        assert_eq!(Uniforms::new(Mat4::identity(), false).color_exponent, 1.0);
    }

    #[test]
    fn test_set_view_proj_keeps_exponent() {
        let mut uniforms = Uniforms::new(Mat4::identity(), true);
        uniforms.set_view_proj(Mat4::translation(1.0, 2.0, 3.0));
        assert_eq!(uniforms.view_proj[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniforms.color_exponent, SRGB_GAMMA);
    }
}
