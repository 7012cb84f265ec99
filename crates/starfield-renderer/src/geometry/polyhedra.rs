//! Platonic solids scaled to a circumradius.
//!
//! Edges are found by connecting every vertex pair at the minimum pairwise
//! distance, which for a regular polyhedron is exactly its edge set.

use super::types::LineMesh;

/// Golden ratio.
const PHI: f32 = 1.618_034;

pub fn tetrahedron(radius: f32) -> LineMesh {
    let v = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    from_vertices(&v, radius)
}

pub fn octahedron(radius: f32) -> LineMesh {
    let v = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    from_vertices(&v, radius)
}

pub fn icosahedron(radius: f32) -> LineMesh {
    let mut v = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-PHI, PHI] {
            v.push([0.0, a, b]);
            v.push([a, b, 0.0]);
            v.push([b, 0.0, a]);
        }
    }
    from_vertices(&v, radius)
}

pub fn dodecahedron(radius: f32) -> LineMesh {
    let inv = 1.0 / PHI;
    let mut v = Vec::with_capacity(20);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                v.push([x, y, z]);
            }
        }
    }
    for a in [-inv, inv] {
        for b in [-PHI, PHI] {
            v.push([0.0, a, b]);
            v.push([a, b, 0.0]);
            v.push([b, 0.0, a]);
        }
    }
    from_vertices(&v, radius)
}

fn from_vertices(raw: &[[f32; 3]], radius: f32) -> LineMesh {
    let scaled: Vec<[f32; 3]> = raw
        .iter()
        .map(|&[x, y, z]| {
            let len = (x * x + y * y + z * z).sqrt();
            [x / len * radius, y / len * radius, z / len * radius]
        })
        .collect();

    let mut min = f32::MAX;
    for (i, a) in scaled.iter().enumerate() {
        for b in &scaled[i + 1..] {
            min = min.min(distance(a, b));
        }
    }

    let tolerance = min * 1e-3;
    let mut mesh = LineMesh::default();
    for (i, a) in scaled.iter().enumerate() {
        for b in &scaled[i + 1..] {
            if (distance(a, b) - min).abs() <= tolerance {
                mesh.push_edge(*a, *b);
            }
        }
    }
    mesh
}

fn distance(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
