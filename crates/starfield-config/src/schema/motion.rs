//! Animation pacing.

use serde::{Deserialize, Serialize};

use super::Tiered;

/// Animation pacing.
///
/// `animation_speed` uses `reduced` on constrained devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub animation_speed: Tiered<f32>,
    /// Target redraw rate of the host loop; 0 redraws as fast as possible.
    pub frame_rate: u32,
    /// Scale per-tick increments by elapsed time relative to 60 Hz. When off,
    /// every frame advances by exactly one tick.
    pub frame_rate_independent: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            animation_speed: Tiered::new(1.0, 0.5),
            frame_rate: 60,
            frame_rate_independent: true,
        }
    }
}
