use wgpu::util::DeviceExt;

use starfield_scene::PointCloud;

use super::pipeline::{create_pipeline, SHADER_SOURCE};
use super::types::{CloudUniforms, ADDITIVE_BLENDING};

struct CloudSlot {
    instance_buffer: wgpu::Buffer,
    point_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    additive: bool,
}

/// Draws a fixed set of point clouds. Positions are uploaded once; only the
/// per-cloud uniforms change per frame.
pub struct PointCloudRenderer {
    additive_pipeline: wgpu::RenderPipeline,
    alpha_pipeline: wgpu::RenderPipeline,
    clouds: Vec<CloudSlot>,
}

impl PointCloudRenderer {
    /// `camera_layout` is the shared bind group 0 layout.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        camera_layout: &wgpu::BindGroupLayout,
        clouds: &[&PointCloud],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let cloud_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cloud bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<CloudUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points pipeline layout"),
            bind_group_layouts: &[camera_layout, &cloud_layout],
            push_constant_ranges: &[],
        });

        let additive_pipeline = create_pipeline(
            device,
            format,
            sample_count,
            &pipeline_layout,
            &shader,
            ADDITIVE_BLENDING,
            "points pipeline (additive)",
        );
        let alpha_pipeline = create_pipeline(
            device,
            format,
            sample_count,
            &pipeline_layout,
            &shader,
            wgpu::BlendState::ALPHA_BLENDING,
            "points pipeline (alpha)",
        );

        let clouds = clouds
            .iter()
            .filter(|c| !c.is_empty())
            .map(|cloud| {
                let instance_buffer =
                    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("cloud positions"),
                        contents: bytemuck::cast_slice(cloud.positions()),
                        usage: wgpu::BufferUsages::VERTEX,
                    });
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("cloud uniforms"),
                    size: std::mem::size_of::<CloudUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("cloud bind group"),
                    layout: &cloud_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                CloudSlot {
                    instance_buffer,
                    point_count: cloud.len() as u32,
                    uniform_buffer,
                    bind_group,
                    additive: cloud.style().additive,
                }
            })
            .collect();

        Self {
            additive_pipeline,
            alpha_pipeline,
            clouds,
        }
    }

    /// Upload this frame's rotation and style for each cloud, in the order
    /// they were given to [`Self::new`]. Empty clouds are skipped.
    pub fn prepare(
        &self,
        queue: &wgpu::Queue,
        clouds: &[&PointCloud],
        pixel_ratio: f32,
        srgb_surface: bool,
    ) {
        let live = clouds.iter().filter(|c| !c.is_empty());
        for (slot, cloud) in self.clouds.iter().zip(live) {
            let uniforms = CloudUniforms::new(cloud, pixel_ratio, srgb_surface);
            queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }
    }

    /// Bind group 0 must already be set on `pass`.
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        for slot in &self.clouds {
            let pipeline = if slot.additive {
                &self.additive_pipeline
            } else {
                &self.alpha_pipeline
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(1, &slot.bind_group, &[]);
            pass.set_vertex_buffer(0, slot.instance_buffer.slice(..));
            pass.draw(0..6, 0..slot.point_count);
        }
    }

    pub fn cloud_count(&self) -> usize {
        self.clouds.len()
    }
}
