//! Point cloud (stars, ambient particles) configuration.

use serde::{Deserialize, Serialize};

use super::Tiered;

/// Section-independent view of a point cloud's settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloudSettings {
    pub count: Tiered<u32>,
    pub size: Tiered<f32>,
    pub span: f32,
    pub depth: f32,
    pub z_offset: f32,
    pub color: String,
    pub opacity: f32,
    pub additive: bool,
    pub spin: [f32; 3],
}

/// Background star field.
///
/// `count` and `size` use `reduced` on constrained devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    pub count: Tiered<u32>,
    pub size: Tiered<f32>,
    /// Width and height of the sampling box.
    pub span: f32,
    pub depth: f32,
    pub z_offset: f32,
    pub color: String,
    pub opacity: f32,
    pub additive: bool,
    /// Cloud rotation per tick (radians, XYZ).
    pub spin: [f32; 3],
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: Tiered::new(2000, 800),
            size: Tiered::new(1.5, 1.2),
            span: 2000.0,
            depth: 1500.0,
            z_offset: -500.0,
            color: "#ffffff".into(),
            opacity: 0.8,
            additive: true,
            spin: [0.0001, 0.0002, 0.0],
        }
    }
}

impl From<&StarsConfig> for PointCloudSettings {
    fn from(c: &StarsConfig) -> Self {
        Self {
            count: c.count,
            size: c.size,
            span: c.span,
            depth: c.depth,
            z_offset: c.z_offset,
            color: c.color.clone(),
            opacity: c.opacity,
            additive: c.additive,
            spin: c.spin,
        }
    }
}

/// Floating cyan particles in front of the stars.
///
/// `count` and `size` use `reduced` on constrained devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub count: Tiered<u32>,
    pub size: Tiered<f32>,
    pub span: f32,
    pub depth: f32,
    pub z_offset: f32,
    pub color: String,
    pub opacity: f32,
    pub additive: bool,
    pub spin: [f32; 3],
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: Tiered::new(500, 150),
            size: Tiered::new(2.0, 1.5),
            span: 1500.0,
            depth: 1000.0,
            z_offset: -300.0,
            color: "#00f0ff".into(),
            opacity: 0.4,
            additive: true,
            spin: [0.0, 0.0005, 0.0003],
        }
    }
}

impl From<&ParticlesConfig> for PointCloudSettings {
    fn from(c: &ParticlesConfig) -> Self {
        Self {
            count: c.count,
            size: c.size,
            span: c.span,
            depth: c.depth,
            z_offset: c.z_offset,
            color: c.color.clone(),
            opacity: c.opacity,
            additive: c.additive,
            spin: c.spin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_defaults() {
        let c = StarsConfig::default();
        assert_eq!(c.count, Tiered::new(2000, 800));
        assert!((c.size.full - 1.5).abs() < f32::EPSILON);
        assert!((c.z_offset + 500.0).abs() < f32::EPSILON);
        assert_eq!(c.spin, [0.0001, 0.0002, 0.0]);
    }

    #[test]
    fn particle_defaults() {
        let c = ParticlesConfig::default();
        assert_eq!(c.count, Tiered::new(500, 150));
        assert_eq!(c.color, "#00f0ff");
        assert!((c.opacity - 0.4).abs() < f32::EPSILON);
        assert_eq!(c.spin, [0.0, 0.0005, 0.0003]);
    }

    #[test]
    fn partial_particles_keep_particle_defaults() {
        let c: ParticlesConfig = toml::from_str("opacity = 0.9").unwrap();
        assert_eq!(c.count.full, 500);
        assert!((c.opacity - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn settings_view_copies_fields() {
        let s = PointCloudSettings::from(&StarsConfig::default());
        assert_eq!(s.count.reduced, 800);
        assert_eq!(s.color, "#ffffff");
        assert!(s.additive);
    }
}
