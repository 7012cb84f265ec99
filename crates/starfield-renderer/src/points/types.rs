use starfield_scene::PointCloud;

use crate::gpu::shader_rgba;
use crate::matrix;

/// Per-cloud uniforms (bind group 1). Layout: mat4 + 2 × vec4 = 96 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CloudUniforms {
    /// Cloud rotation.
    pub model: [f32; 16],
    /// rgb + opacity.
    pub color: [f32; 4],
    /// Point size in physical px in `x`.
    pub size: [f32; 4],
}

impl CloudUniforms {
    pub fn new(cloud: &PointCloud, pixel_ratio: f32, srgb_surface: bool) -> Self {
        let style = cloud.style();
        Self {
            model: matrix::euler_xyz(cloud.rotation()),
            color: shader_rgba(style.color, style.opacity, srgb_surface),
            size: [style.size * pixel_ratio, 0.0, 0.0, 0.0],
        }
    }
}

/// Instance layout: one `vec3<f32>` position per point, read straight from
/// the cloud's flat position array.
pub(crate) const POINT_INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> =
    wgpu::VertexBufferLayout {
        array_stride: 12,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };

/// Additive blending for glowing points.
pub(crate) const ADDITIVE_BLENDING: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};
