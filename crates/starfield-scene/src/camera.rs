//! Perspective camera that eases toward the pointer.

use starfield_common::Vec3;

use crate::preset::CameraPreset;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    /// Always the origin.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraRig {
    pub fn new(preset: &CameraPreset, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, preset.base_z),
            target: Vec3::ZERO,
            fov_y: preset.fov_y,
            aspect,
            near: preset.near,
            far: preset.far,
        }
    }

    /// Move a fraction `easing` of the way toward `(x, y)`. Not scaled by
    /// frame time.
    pub fn ease_toward(&mut self, x: f32, y: f32, easing: f32) {
        self.position.x += (x - self.position.x) * easing;
        self.position.y += (y - self.position.y) * easing;
    }

    /// Update the aspect ratio; a zero height leaves it unchanged.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}
