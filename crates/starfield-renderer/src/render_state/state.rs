use std::sync::Arc;
use winit::window::Window;

use starfield_scene::preset::RenderPreset;
use starfield_scene::SceneAnimator;

use super::camera::pixel_ratio;
use super::helpers::{clear_color, create_msaa_view};
use crate::gpu::{CameraUniforms, GpuContext, RendererError};
use crate::points::PointCloudRenderer;
use crate::wireframe::WireframeRenderer;

/// GPU state for drawing the backdrop: shared camera uniforms, the point
/// and wireframe renderers, and the optional MSAA target.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) points: PointCloudRenderer,
    pub(super) wireframe: WireframeRenderer,
    pub(super) camera_buffer: wgpu::Buffer,
    pub(super) camera_bind_group: wgpu::BindGroup,
    pub(super) msaa_view: Option<wgpu::TextureView>,
    pub(super) render: RenderPreset,
    pub(super) clear_color: wgpu::Color,
    pub(super) srgb: bool,
}

impl RenderState {
    /// Create the GPU context and upload the scene's static geometry.
    pub async fn new(
        window: Arc<Window>,
        scene: &SceneAnimator,
        render: RenderPreset,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, render.antialias).await?;
        let format = gpu.format();
        let srgb = format.is_srgb();

        let camera_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_layout = gpu
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("camera bind group layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<CameraUniforms>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera bind group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let points = PointCloudRenderer::new(
            &gpu.device,
            format,
            gpu.sample_count,
            &camera_layout,
            &[scene.stars(), scene.particles()],
        );

        let kinds: Vec<_> = scene
            .glyphs()
            .kinds()
            .iter()
            .chain(scene.shapes().kinds())
            .copied()
            .collect();
        let wireframe = WireframeRenderer::new(
            &gpu.device,
            format,
            gpu.sample_count,
            &camera_layout,
            &kinds,
            scene.glyphs().len() + scene.shapes().len(),
        );

        let msaa_view = create_msaa_view(
            &gpu.device,
            format,
            gpu.size.width,
            gpu.size.height,
            gpu.sample_count,
        );

        tracing::info!(
            samples = gpu.sample_count,
            clouds = points.cloud_count(),
            meshes = wireframe.mesh_count(),
            "Render state ready"
        );

        Ok(Self {
            clear_color: clear_color(render.background, srgb),
            gpu,
            points,
            wireframe,
            camera_buffer,
            camera_bind_group,
            msaa_view,
            render,
            srgb,
        })
    }

    /// Reconfigure the surface and rebuild the MSAA target.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.msaa_view = create_msaa_view(
            &self.gpu.device,
            self.gpu.format(),
            self.gpu.size.width,
            self.gpu.size.height,
            self.gpu.sample_count,
        );
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.gpu.scale_factor = scale_factor;
    }

    /// Window scale factor capped by the preset.
    pub fn pixel_ratio(&self) -> f32 {
        pixel_ratio(self.gpu.scale_factor, self.render.max_pixel_ratio)
    }
}
