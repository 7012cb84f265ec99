pub(crate) const SHADER_SOURCE: &str = r#"
struct Camera {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    fog: vec4<f32>,
    viewport: vec4<f32>,
};

struct Cloud {
    model: mat4x4<f32>,
    color: vec4<f32>,
    size: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(1) @binding(0)
var<uniform> cloud: Cloud;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) view_depth: f32,
};

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32, @location(0) position: vec3<f32>) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
    );

    let view_pos = camera.view * cloud.model * vec4<f32>(position, 1.0);
    let clip = camera.proj * view_pos;

    // Expand in clip space so the quad is `size` px across after the divide
    let offset = corners[vertex_index] * cloud.size.x / camera.viewport.xy;

    var out: VertexOutput;
    out.clip_position = vec4<f32>(clip.xy + offset * clip.w, clip.zw);
    out.view_depth = -view_pos.z;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let d = camera.fog.w * in.view_depth;
    let fog = 1.0 - exp(-d * d);
    return vec4<f32>(mix(cloud.color.rgb, camera.fog.rgb, fog), cloud.color.a);
}
"#;

use super::types::POINT_INSTANCE_LAYOUT;

pub(crate) fn create_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    sample_count: u32,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    blend: wgpu::BlendState,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[POINT_INSTANCE_LAYOUT],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
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
    })
}
