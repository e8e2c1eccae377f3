//! GPU context and per-frame drawing.
//!
//! [`WgpuRenderer`] owns the surface, device and both scene pipelines. Each frame it rebuilds
//! the scene geometry on the CPU, uploads it into growable vertex buffers and records a single
//! render pass: triangles first, then lines.

use crate::app::error::AppError;
use crate::config::SceneConfig;
use crate::math::mat::Mat4;
use crate::renderer::pipeline_builder::PipelineBuilder;
use crate::renderer::scene_mesh::SceneMesh;
use crate::renderer::uniform::{Uniforms, color_exponent};
use crate::renderer::vertex::Vertex;
use crate::scene::SceneState;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;
const INITIAL_VERTEX_CAPACITY: u64 = 16 * 1024;

/// A vertex buffer that is reallocated whenever a frame needs more room than it has.
struct DynamicVertexBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    capacity: u64,
    vertex_count: u32,
}

impl DynamicVertexBuffer {
    fn new(device: &wgpu::Device, label: &'static str) -> Self {
        Self {
            label,
            buffer: Self::allocate(device, label, INITIAL_VERTEX_CAPACITY),
            capacity: INITIAL_VERTEX_CAPACITY,
            vertex_count: 0,
        }
    }

    fn allocate(device: &wgpu::Device, label: &'static str, vertices: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: vertices * std::mem::size_of::<Vertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, vertices: &[Vertex]) {
        let needed = vertices.len() as u64;
        if needed > self.capacity {
            let capacity = needed.next_power_of_two();
            log::debug!(
                "Growing {} from {} to {} vertices",
                self.label,
                self.capacity,
                capacity
            );
            self.buffer = Self::allocate(device, self.label, capacity);
            self.capacity = capacity;
        }
        if !vertices.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.vertex_count = vertices.len() as u32;
    }
}

pub struct WgpuRenderer {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface_config: wgpu::SurfaceConfiguration,
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    triangle_buffer: DynamicVertexBuffer,
    line_buffer: DynamicVertexBuffer,
    uniforms: Uniforms,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    depth_texture: Option<wgpu::Texture>,
    scene_mesh: SceneMesh,
    clear_color: wgpu::Color,
}

impl WgpuRenderer {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
        config: &SceneConfig,
    ) -> Result<Self, AppError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(AppError::NoAdapter)?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Scene Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: Default::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let capabilities = surface.get_capabilities(&adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .or_else(|| capabilities.formats.first().copied())
            .ok_or(AppError::UnsupportedSurface)?;
        if !format.is_srgb() {
            log::warn!("No sRGB surface format available, using {:?}", format);
        }
        let alpha_mode = capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        let uniforms = Uniforms::new(Mat4::identity(), format.is_srgb());
        let uniform_buffer = uniforms.create_buffer(&device);
        let (uniform_bind_group, uniform_bind_group_layout) =
            uniforms.create_bind_group(&uniform_buffer, &device);

        let depth_stencil = wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        };
        let shader = include_str!("shaders/scene.wgsl");

        let triangle_pipeline = PipelineBuilder::new(&device, format)
            .with_label("Scene Triangles")
            .with_shader(shader)
            .with_vertex_buffer(Vertex::desc())
            .with_bind_group_layout(&uniform_bind_group_layout)
            .with_alpha_blending()
            .with_no_culling()
            .with_depth_stencil(depth_stencil.clone())
            .build()?;

        let line_pipeline = PipelineBuilder::new(&device, format)
            .with_label("Scene Lines")
            .with_shader(shader)
            .with_vertex_buffer(Vertex::desc())
            .with_bind_group_layout(&uniform_bind_group_layout)
            .with_alpha_blending()
            .with_no_culling()
            .with_topology(wgpu::PrimitiveTopology::LineList)
            .with_depth_stencil(depth_stencil)
            .build()?;

        let triangle_buffer = DynamicVertexBuffer::new(&device, "Scene Triangle Buffer");
        let line_buffer = DynamicVertexBuffer::new(&device, "Scene Line Buffer");

        let clear_color = surface_clear_color(config.clear_color, format.is_srgb());

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            triangle_pipeline,
            line_pipeline,
            triangle_buffer,
            line_buffer,
            uniforms,
            uniform_buffer,
            uniform_bind_group,
            depth_texture: None,
            scene_mesh: SceneMesh::new(),
            clear_color,
        })
    }

    /// Reconfigures the surface. Zero-sized requests (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Reapplies the current configuration after the surface was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn depth_view(&mut self) -> wgpu::TextureView {
        let (width, height) = (self.surface_config.width, self.surface_config.height);
        let texture = match self.depth_texture.take() {
            Some(texture) if texture.width() == width && texture.height() == height => texture,
            _ => self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            }),
        };
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.depth_texture = Some(texture);
        view
    }

    /// Draws one frame of `state`.
    pub fn render(&mut self, state: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let depth_view = self.depth_view();

        self.scene_mesh.build(&state.scene);
        log::trace!(
            "Frame geometry: {} triangles, {} lines",
            self.scene_mesh.mesh.triangle_count(),
            self.scene_mesh.mesh.line_count()
        );
        self.triangle_buffer
            .upload(&self.device, &self.queue, &self.scene_mesh.mesh.triangles);
        self.line_buffer
            .upload(&self.device, &self.queue, &self.scene_mesh.mesh.lines);

        self.uniforms.set_view_proj(state.view_projection());
        self.queue
            .write_buffer(&self.uniform_buffer, 0, self.uniforms.as_bytes());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            pass.set_pipeline(&self.triangle_pipeline);
            pass.set_vertex_buffer(0, self.triangle_buffer.buffer.slice(..));
            pass.draw(0..self.triangle_buffer.vertex_count, 0..1);

            pass.set_pipeline(&self.line_pipeline);
            pass.set_vertex_buffer(0, self.line_buffer.buffer.slice(..));
            pass.draw(0..self.line_buffer.vertex_count, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}

/// Converts the configured sRGB clear colour into the space the surface expects.
///
/// Clear values bypass the shader, so they get the same exponent the vertex shader applies.
pub fn surface_clear_color(rgba: [f64; 4], srgb_surface: bool) -> wgpu::Color {
    let exponent = f64::from(color_exponent(srgb_surface));
    let channel = |c: f64| c.powf(exponent);
    wgpu::Color {
        r: channel(rgba[0]),
        g: channel(rgba[1]),
        b: channel(rgba[2]),
        a: rgba[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_passthrough() {
        let color = surface_clear_color([1.0, 0.85, 0.4, 1.0], false);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.85);
        assert_eq!(color.b, 0.4);
    }

    /// Tests that an sRGB surface receives the clear colour in linear space.
    #[test]
    fn test_clear_color_linearised() {
        let color = surface_clear_color([1.0, 0.85, 0.4, 1.0], true);
        assert_eq!(color.r, 1.0);
        assert!(color.g < 0.85 && color.g > 0.6);
        assert!((color.b - 0.4f64.powf(2.2)).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }

    /// Tests that cleared pixels and shaded vertices of the same colour come out equal.
    #[test]
    fn test_clear_color_matches_vertex_shading() {
        let authored = 0.6f32;
        for srgb_surface in [true, false] {
            let uniforms = Uniforms::new(Mat4::identity(), srgb_surface);
            let shaded = authored.powf(uniforms.color_exponent);
            let cleared = surface_clear_color([authored as f64; 4], srgb_surface);
            assert!((cleared.r - shaded as f64).abs() < 1e-6, "srgb_surface = {srgb_surface}");
        }
    }
}
