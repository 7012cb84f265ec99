//! 4×4 matrix math for view, projection and model transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Clip-space depth is
//! wgpu's `[0, 1]`.

use starfield_common::Vec3;

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection. `fov_y` is in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        far * near * range_inv,
        0.0,
    ]
}

pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

pub fn rotate_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Euler rotation applied X, then Y, then Z in the object's local frame
/// (`Rx · Ry · Rz`).
pub fn euler_xyz(r: Vec3) -> Mat4 {
    mul(&rotate_x(r.x), &mul(&rotate_y(r.y), &rotate_z(r.z)))
}

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// `translate(position) · euler_xyz(rotation)`.
pub fn model(position: Vec3, rotation: Vec3) -> Mat4 {
    mul(&translate(position.x, position.y, position.z), &euler_xyz(rotation))
}

/// View matrix for a camera at `eye` looking at `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = normalize(target - eye);
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        s.x,
        u.x,
        -f.x,
        0.0,
        s.y,
        u.y,
        -f.y,
        0.0,
        s.z,
        u.z,
        -f.z,
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1) and return the homogeneous result.
pub fn transform_point(m: &Mat4, p: Vec3) -> [f32; 4] {
    let v = [p.x, p.y, p.z, 1.0];
    let mut out = [0.0f32; 4];
    for (row, o) in out.iter_mut().enumerate() {
        *o = (0..4).map(|k| m[k * 4 + row] * v[k]).sum();
    }
    out
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > 0.0 {
        v * (1.0 / len)
    } else {
        v
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        assert!(approx_eq(&mul(&IDENTITY, &IDENTITY), &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let p = transform_point(&translate(1.0, 2.0, 3.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(approx_eq(&p, &[2.0, 3.0, 4.0, 1.0], 1e-6));
    }

    #[test]
    fn rotate_z_90_maps_x_to_y() {
        let p = transform_point(&rotate_z(FRAC_PI_2), Vec3::new(1.0, 0.0, 0.0));
        assert!(approx_eq(&p, &[0.0, 1.0, 0.0, 1.0], 1e-6));
    }

    #[test]
    fn rotate_x_90_maps_y_to_z() {
        let p = transform_point(&rotate_x(FRAC_PI_2), Vec3::new(0.0, 1.0, 0.0));
        assert!(approx_eq(&p, &[0.0, 0.0, 1.0, 1.0], 1e-6));
    }

    #[test]
    fn rotate_y_90_maps_z_to_x() {
        let p = transform_point(&rotate_y(FRAC_PI_2), Vec3::new(0.0, 0.0, 1.0));
        assert!(approx_eq(&p, &[1.0, 0.0, 0.0, 1.0], 1e-6));
    }

    #[test]
    fn euler_applies_z_first() {
        // Z then X: x-axis goes to y, then y goes to z
        let r = euler_xyz(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        let p = transform_point(&r, Vec3::new(1.0, 0.0, 0.0));
        assert!(approx_eq(&p, &[0.0, 0.0, 1.0, 1.0], 1e-6));
    }

    #[test]
    fn zero_euler_is_identity() {
        assert!(approx_eq(&euler_xyz(Vec3::ZERO), &IDENTITY, 1e-6));
    }

    #[test]
    fn model_rotates_then_translates() {
        let m = model(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, FRAC_PI_2));
        let p = transform_point(&m, Vec3::new(1.0, 0.0, 0.0));
        assert!(approx_eq(&p, &[10.0, 1.0, 0.0, 1.0], 1e-5));
    }

    #[test]
    fn look_at_down_negative_z() {
        let v = look_at(Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let origin = transform_point(&v, Vec3::ZERO);
        assert!(approx_eq(&origin, &[0.0, 0.0, -500.0, 1.0], 1e-4));
        let right = transform_point(&v, Vec3::new(1.0, 0.0, 500.0));
        assert!(approx_eq(&right, &[1.0, 0.0, 0.0, 1.0], 1e-4));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = perspective(75f32.to_radians(), 16.0 / 9.0, 0.1, 2000.0);
        let near = transform_point(&p, Vec3::new(0.0, 0.0, -0.1));
        let far = transform_point(&p, Vec3::new(0.0, 0.0, -2000.0));
        assert!((near[2] / near[3]).abs() < 1e-4);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
        assert!((p[11] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_basic() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
    }
}
