//! Render surface configuration.

use serde::{Deserialize, Serialize};

use super::Tiered;

/// Surface, fog and quality settings.
///
/// `max_pixel_ratio` and `antialias` use `reduced` on constrained devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub background: String,
    pub fog_color: String,
    /// Exponential-squared fog density.
    pub fog_density: f32,
    pub max_pixel_ratio: Tiered<f32>,
    pub antialias: Tiered<bool>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: "#0a0a0f".into(),
            fog_color: "#0a0a0f".into(),
            fog_density: 0.00015,
            max_pixel_ratio: Tiered::new(2.0, 1.5),
            antialias: Tiered::new(true, false),
        }
    }
}
