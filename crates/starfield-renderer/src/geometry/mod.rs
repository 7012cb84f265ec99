//! Wireframe edge lists for every solid kind.
//!
//! Each mesh is a flat line list: vertices come in pairs, one pair per
//! unique edge.

mod curves;
mod polyhedra;
mod types;

pub use curves::*;
pub use polyhedra::*;
pub use types::*;

use starfield_config::schema::SolidKind;

/// Build the edge list for `kind`.
pub fn build_mesh(kind: &SolidKind) -> LineMesh {
    match *kind {
        SolidKind::Ring {
            inner_radius,
            outer_radius,
            segments,
        } => ring(inner_radius, outer_radius, segments),
        SolidKind::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => torus(radius, tube, radial_segments, tubular_segments),
        SolidKind::Tetrahedron { radius } => tetrahedron(radius),
        SolidKind::Octahedron { radius } => octahedron(radius),
        SolidKind::Dodecahedron { radius } => dodecahedron(radius),
        SolidKind::Icosahedron { radius } => icosahedron(radius),
    }
}
