//! Camera and pointer-follow configuration.

use serde::{Deserialize, Serialize};

use super::Tiered;

/// Perspective camera and how it follows the pointer.
///
/// `easing` and `pointer_influence` use `reduced` on constrained devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Resting distance from the origin along +Z.
    pub base_z: f32,
    /// Fraction of the remaining distance to the pointer target covered per frame.
    pub easing: Tiered<f32>,
    /// Pointer offset from the viewport center is multiplied by this.
    pub pointer_influence: Tiered<f32>,
    pub touch_influence: f32,
    /// Camera z moves by `scroll_y * scroll_rate` while parallax is on.
    pub scroll_rate: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
            base_z: 500.0,
            easing: Tiered::new(0.02, 0.01),
            pointer_influence: Tiered::new(0.05, 0.02),
            touch_influence: 0.02,
            scroll_rate: 0.1,
        }
    }
}
