//! Floating solid (glyph and geometric shape) configuration.

use serde::{Deserialize, Serialize};

use super::Tiered;

/// Wireframe geometry a floating solid is drawn with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SolidKind {
    /// Flat annulus with `segments` sides.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Tetrahedron { radius: f32 },
    Octahedron { radius: f32 },
    Dodecahedron { radius: f32 },
    Icosahedron { radius: f32 },
}

impl SolidKind {
    /// Short lowercase name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            SolidKind::Ring { .. } => "ring",
            SolidKind::Torus { .. } => "torus",
            SolidKind::Tetrahedron { .. } => "tetrahedron",
            SolidKind::Octahedron { .. } => "octahedron",
            SolidKind::Dodecahedron { .. } => "dodecahedron",
            SolidKind::Icosahedron { .. } => "icosahedron",
        }
    }
}

/// Drifting "ancient glyph" wireframes.
///
/// Glyphs are skipped entirely on constrained devices unless
/// `show_on_constrained` is set; `count` uses `reduced` on low-performance
/// devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphsConfig {
    pub enabled: bool,
    pub show_on_constrained: bool,
    pub count: Tiered<u32>,
    pub kinds: Vec<SolidKind>,
    /// Sampling box extents (x, y, z).
    pub spread: [f32; 3],
    pub z_offset: f32,
    /// Angular velocity is drawn from `±max_angular_speed / 2` per axis.
    pub max_angular_speed: f32,
    /// Planar drift is drawn from `±max_drift_speed / 2` per axis.
    pub max_drift_speed: f32,
    /// Drift reflects once `|x|` or `|y|` exceeds this.
    pub boundary: f32,
    pub color: String,
    pub opacity: f32,
}

impl Default for GlyphsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_on_constrained: false,
            count: Tiered::new(15, 8),
            kinds: vec![
                SolidKind::Ring {
                    inner_radius: 15.0,
                    outer_radius: 20.0,
                    segments: 6,
                },
                SolidKind::Torus {
                    radius: 15.0,
                    tube: 3.0,
                    radial_segments: 6,
                    tubular_segments: 6,
                },
                SolidKind::Octahedron { radius: 15.0 },
            ],
            spread: [1200.0, 1200.0, 800.0],
            z_offset: -400.0,
            max_angular_speed: 0.002,
            max_drift_speed: 0.1,
            boundary: 600.0,
            color: "#00f0ff".into(),
            opacity: 0.15,
        }
    }
}

/// Slowly tumbling geometric shapes.
///
/// Same profile rules as [`GlyphsConfig`]. Shapes start unrotated and do not
/// drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    pub enabled: bool,
    pub show_on_constrained: bool,
    pub count: Tiered<u32>,
    pub kinds: Vec<SolidKind>,
    pub spread: [f32; 3],
    pub z_offset: f32,
    pub max_angular_speed: f32,
    pub color: String,
    pub opacity: f32,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_on_constrained: false,
            count: Tiered::new(8, 4),
            kinds: vec![
                SolidKind::Icosahedron { radius: 30.0 },
                SolidKind::Dodecahedron { radius: 25.0 },
                SolidKind::Tetrahedron { radius: 35.0 },
            ],
            spread: [1000.0, 1000.0, 600.0],
            z_offset: -300.0,
            max_angular_speed: 0.003,
            color: "#0066ff".into(),
            opacity: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_defaults() {
        let c = GlyphsConfig::default();
        assert_eq!(c.count, Tiered::new(15, 8));
        assert_eq!(c.kinds.len(), 3);
        assert_eq!(c.kinds[0].name(), "ring");
        assert!((c.boundary - 600.0).abs() < f32::EPSILON);
        assert!(!c.show_on_constrained);
    }

    #[test]
    fn shape_defaults() {
        let c = ShapesConfig::default();
        assert_eq!(c.count, Tiered::new(8, 4));
        assert_eq!(c.kinds[2], SolidKind::Tetrahedron { radius: 35.0 });
        assert_eq!(c.color, "#0066ff");
    }

    #[test]
    fn kinds_parse_from_tagged_tables() {
        let c: ShapesConfig = toml::from_str(
            r#"
kinds = [
    { type = "octahedron", radius = 10.0 },
    { type = "ring", inner_radius = 1.0, outer_radius = 2.0, segments = 8 },
]
"#,
        )
        .unwrap();
        assert_eq!(c.kinds.len(), 2);
        assert_eq!(c.kinds[0], SolidKind::Octahedron { radius: 10.0 });
        assert_eq!(c.kinds[1].name(), "ring");
    }
}
