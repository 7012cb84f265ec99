use wgpu::util::DeviceExt;

use starfield_config::schema::SolidKind;
use starfield_scene::SceneAnimator;

use super::pipeline::SHADER_SOURCE;
use super::types::{build_instances, DrawBatch, SolidInstance};
use crate::geometry::{build_mesh, LineVertex};

struct MeshSlot {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

/// Draws every glyph and shape as alpha-blended lines.
pub struct WireframeRenderer {
    pipeline: wgpu::RenderPipeline,
    meshes: Vec<MeshSlot>,
    instance_buffer: wgpu::Buffer,
    max_instances: u32,
    batches: Vec<DrawBatch>,
}

impl WireframeRenderer {
    /// `kinds` lists glyph kinds followed by shape kinds; `max_instances` is
    /// the total solid count.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        camera_layout: &wgpu::BindGroupLayout,
        kinds: &[SolidKind],
        max_instances: usize,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("wireframe shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("wireframe pipeline layout"),
            bind_group_layouts: &[camera_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("wireframe pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[LineVertex::LAYOUT, SolidInstance::LAYOUT],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        let meshes = kinds
            .iter()
            .map(|kind| {
                let mesh = build_mesh(kind);
                tracing::debug!(
                    kind = kind.name(),
                    edges = mesh.edge_count(),
                    "Built wireframe mesh"
                );
                MeshSlot {
                    vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("wireframe mesh"),
                        contents: bytemuck::cast_slice(&mesh.vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    vertex_count: mesh.vertices.len() as u32,
                }
            })
            .collect();

        // Zero-sized vertex buffers are invalid
        let max_instances = max_instances.max(1) as u32;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wireframe instances"),
            size: max_instances as u64 * std::mem::size_of::<SolidInstance>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            meshes,
            instance_buffer,
            max_instances,
            batches: Vec::new(),
        }
    }

    /// Upload this frame's solid transforms.
    pub fn prepare(&mut self, queue: &wgpu::Queue, scene: &SceneAnimator, srgb_surface: bool) {
        let (instances, batches) = build_instances(scene, srgb_surface);
        let count = instances.len().min(self.max_instances as usize);
        if count > 0 {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&instances[..count]),
            );
        }
        self.batches = batches
            .into_iter()
            .filter(|b| b.mesh < self.meshes.len() && b.instances.end as usize <= count)
            .collect();
    }

    /// Bind group 0 must already be set on `pass`.
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        if self.batches.is_empty() {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        for batch in &self.batches {
            let mesh = &self.meshes[batch.mesh];
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.draw(0..mesh.vertex_count, batch.instances.clone());
        }
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }
}
