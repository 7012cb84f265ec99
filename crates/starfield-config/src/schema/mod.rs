//! Configuration schema types for Starfield.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock backdrop's constants.

mod camera;
mod device;
mod logging;
mod motion;
mod page;
mod points;
mod render;
mod solids;
mod tiered;

pub use camera::*;
pub use device::*;
pub use logging::*;
pub use motion::*;
pub use page::*;
pub use points::*;
pub use render::*;
pub use solids::*;
pub use tiered::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct StarfieldConfig {
    pub device: DeviceConfig,
    pub stars: StarsConfig,
    pub particles: ParticlesConfig,
    pub glyphs: GlyphsConfig,
    pub shapes: ShapesConfig,
    pub camera: CameraConfig,
    pub motion: MotionConfig,
    pub render: RenderConfig,
    pub page: PageConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
