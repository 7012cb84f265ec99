//! Uniform block shared by the point and wireframe passes (bind group 0).

use starfield_common::Color;

/// Matches the WGSL `Camera` struct in both shaders.
///
/// Layout: 2 × mat4 + 2 × vec4 = 160 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: [f32; 16],
    pub proj: [f32; 16],
    /// Fog color rgb, density in `w`.
    pub fog: [f32; 4],
    /// Surface width px, surface height px, pixel ratio, unused.
    pub viewport: [f32; 4],
}

/// Convert a config color to the shader's color space. sRGB surfaces expect
/// linear input.
pub fn shader_rgb(color: Color, srgb_surface: bool) -> [f32; 3] {
    if srgb_surface {
        color.to_linear_rgb()
    } else {
        color.to_rgb_f32()
    }
}

pub fn shader_rgba(color: Color, opacity: f32, srgb_surface: bool) -> [f32; 4] {
    let [r, g, b] = shader_rgb(color, srgb_surface);
    [r, g, b, opacity]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_uniforms_size_is_160_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 160);
    }

    #[test]
    fn white_is_white_in_both_spaces() {
        for srgb in [true, false] {
            for c in shader_rgb(Color::WHITE, srgb) {
                assert!((c - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn srgb_surface_darkens_midtones() {
        let grey = Color::from_rgba(128, 128, 128, 255);
        assert!(shader_rgb(grey, true)[0] < shader_rgb(grey, false)[0]);
        assert_eq!(shader_rgba(grey, 0.4, false)[3], 0.4);
    }
}
