//! Device profile detection settings.

use serde::{Deserialize, Serialize};

/// Forced device profile, or `auto` to detect from the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ProfileOverride {
    #[default]
    Auto,
    Full,
    Constrained,
}

/// Device capability detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub profile: ProfileOverride,
    /// Viewports narrower than this (logical px) count as constrained.
    pub constrained_max_width: u32,
    /// Hosts reporting fewer hardware threads than this are low-concurrency.
    pub min_parallelism: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            profile: ProfileOverride::Auto,
            constrained_max_width: 768,
            min_parallelism: 4,
        }
    }
}
