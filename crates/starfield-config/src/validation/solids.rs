//! Glyph and shape validation.

use crate::schema::{SolidKind, StarfieldConfig};

use super::helpers::{validate_color, validate_range, validate_range_f32, validate_tiered_range};

fn validate_kinds(errors: &mut Vec<String>, section: &str, kinds: &[SolidKind], count: u32) {
    if kinds.is_empty() && count > 0 {
        errors.push(format!("{section}.kinds must not be empty"));
    }
    for (i, kind) in kinds.iter().enumerate() {
        let name = format!("{section}.kinds[{i}]");
        match *kind {
            SolidKind::Ring {
                inner_radius,
                outer_radius,
                segments,
            } => {
                if inner_radius < 0.0 || outer_radius <= inner_radius {
                    errors.push(format!("{name}: ring needs 0 <= inner_radius < outer_radius"));
                }
                validate_range(errors, &format!("{name}.segments"), segments, 3, 256);
            }
            SolidKind::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => {
                if radius <= 0.0 || tube <= 0.0 {
                    errors.push(format!("{name}: torus radius and tube must be positive"));
                }
                validate_range(errors, &format!("{name}.radial_segments"), radial_segments, 3, 256);
                validate_range(
                    errors,
                    &format!("{name}.tubular_segments"),
                    tubular_segments,
                    3,
                    256,
                );
            }
            SolidKind::Tetrahedron { radius }
            | SolidKind::Octahedron { radius }
            | SolidKind::Dodecahedron { radius }
            | SolidKind::Icosahedron { radius } => {
                if radius <= 0.0 {
                    errors.push(format!("{name}.radius must be positive"));
                }
            }
        }
    }
}

pub(crate) fn validate_glyphs(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let g = &config.glyphs;
    validate_tiered_range(errors, "glyphs.count", &g.count, 0, 1000);
    validate_kinds(errors, "glyphs", &g.kinds, g.count.full.max(g.count.reduced));
    validate_range_f32(errors, "glyphs.max_angular_speed", g.max_angular_speed, 0.0, 1.0);
    validate_range_f32(errors, "glyphs.max_drift_speed", g.max_drift_speed, 0.0, 100.0);
    validate_range_f32(errors, "glyphs.boundary", g.boundary, 1.0, 100_000.0);
    validate_range_f32(errors, "glyphs.opacity", g.opacity, 0.0, 1.0);
    validate_color(errors, "glyphs.color", &g.color);
}

pub(crate) fn validate_shapes(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let s = &config.shapes;
    validate_tiered_range(errors, "shapes.count", &s.count, 0, 1000);
    validate_kinds(errors, "shapes", &s.kinds, s.count.full.max(s.count.reduced));
    validate_range_f32(errors, "shapes.max_angular_speed", s.max_angular_speed, 0.0, 1.0);
    validate_range_f32(errors, "shapes.opacity", s.opacity, 0.0, 1.0);
    validate_color(errors, "shapes.color", &s.color);
}
