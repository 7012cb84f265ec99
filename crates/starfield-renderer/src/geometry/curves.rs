//! Ring and torus wireframes: grid edges plus one diagonal per quad.

use std::f32::consts::TAU;

use super::types::LineMesh;

/// Flat annulus in the XY plane.
///
/// Per segment: inner arc, outer arc, one radial spoke and one diagonal,
/// so `4 × segments` edges.
pub fn ring(inner_radius: f32, outer_radius: f32, segments: u32) -> LineMesh {
    let segments = segments.max(3);
    let point = |r: f32, i: u32| {
        let theta = TAU * (i % segments) as f32 / segments as f32;
        [r * theta.cos(), r * theta.sin(), 0.0]
    };

    let mut mesh = LineMesh::default();
    for i in 0..segments {
        mesh.push_edge(point(inner_radius, i), point(inner_radius, i + 1));
        mesh.push_edge(point(outer_radius, i), point(outer_radius, i + 1));
        mesh.push_edge(point(inner_radius, i), point(outer_radius, i));
        mesh.push_edge(point(inner_radius, i), point(outer_radius, i + 1));
    }
    mesh
}

/// Torus around the Z axis.
///
/// `radial_segments` rings around the tube, `tubular_segments` steps around
/// the main circle. Each grid cell contributes two sides and a diagonal, so
/// `3 × radial × tubular` edges.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> LineMesh {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let point = |j: u32, i: u32| {
        let v = TAU * (j % radial) as f32 / radial as f32;
        let u = TAU * (i % tubular) as f32 / tubular as f32;
        let r = radius + tube * v.cos();
        [r * u.cos(), r * u.sin(), tube * v.sin()]
    };

    let mut mesh = LineMesh::default();
    for j in 0..radial {
        for i in 0..tubular {
            mesh.push_edge(point(j, i), point(j, i + 1));
            mesh.push_edge(point(j, i), point(j + 1, i));
            mesh.push_edge(point(j, i), point(j + 1, i + 1));
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_edge_count() {
        assert_eq!(ring(15.0, 20.0, 6).edge_count(), 24);
        assert_eq!(ring(1.0, 2.0, 32).edge_count(), 128);
    }

    #[test]
    fn ring_stays_in_plane_within_outer_radius() {
        let mesh = ring(15.0, 20.0, 6);
        assert!(mesh.vertices.iter().all(|v| v.position[2] == 0.0));
        assert!((mesh.bounding_radius() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn ring_has_a_spoke_and_a_diagonal_per_segment() {
        let mesh = ring(15.0, 20.0, 6);
        let radius = |p: [f32; 3]| (p[0] * p[0] + p[1] * p[1]).sqrt();
        let crossing = mesh
            .vertices
            .chunks(2)
            .filter(|e| (radius(e[0].position) - radius(e[1].position)).abs() > 1.0)
            .count();
        assert_eq!(crossing, 12);
    }

    #[test]
    fn degenerate_segment_count_is_raised() {
        assert_eq!(ring(1.0, 2.0, 1).edge_count(), 12);
        assert_eq!(torus(5.0, 1.0, 0, 0).edge_count(), 27);
    }

    #[test]
    fn torus_edge_count() {
        assert_eq!(torus(15.0, 3.0, 6, 6).edge_count(), 108);
    }

    #[test]
    fn torus_extent() {
        let mesh = torus(15.0, 3.0, 6, 6);
        assert!((mesh.bounding_radius() - 18.0).abs() < 1e-4);
        assert!(mesh
            .vertices
            .iter()
            .all(|v| v.position[2].abs() <= 3.0 + 1e-4));
    }
}
