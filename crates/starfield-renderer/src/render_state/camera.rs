//! Per-frame camera uniforms from the scene.

use starfield_common::Vec3;
use starfield_scene::preset::RenderPreset;
use starfield_scene::SceneAnimator;

use crate::gpu::{shader_rgb, CameraUniforms, PhysicalSize};
use crate::matrix;

const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Effective pixel ratio: the window scale factor capped by the preset.
pub fn pixel_ratio(scale_factor: f64, cap: f32) -> f32 {
    (scale_factor as f32).min(cap).max(0.0)
}

pub fn compute_camera_uniforms(
    scene: &SceneAnimator,
    render: &RenderPreset,
    size: PhysicalSize,
    pixel_ratio: f32,
    srgb_surface: bool,
) -> CameraUniforms {
    let cam = scene.camera();
    let [r, g, b] = shader_rgb(render.fog_color, srgb_surface);

    CameraUniforms {
        view: matrix::look_at(cam.position, cam.target, UP),
        proj: matrix::perspective(cam.fov_y, cam.aspect, cam.near, cam.far),
        fog: [r, g, b, render.fog_density],
        viewport: [size.width as f32, size.height as f32, pixel_ratio, 0.0],
    }
}

// =============================================================================
// Tests
// =============================================================================
