//! Static point clouds that spin as a whole.

use rand::Rng;
use starfield_common::{Color, Vec3};

use crate::preset::PointCloudPreset;

/// Uniform draw style shared by every point in a cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// Point size in logical px.
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
    pub additive: bool,
}

/// A cloud of points sampled once inside a box.
///
/// Positions never change after generation; only `rotation` advances.
#[derive(Debug, Clone)]
pub struct PointCloud {
    /// Flat xyz triples.
    positions: Vec<f32>,
    style: PointStyle,
    rotation: Vec3,
    spin: Vec3,
}

impl PointCloud {
    /// Sample `preset.count` points with `x, y` in `[-span/2, span/2)` and
    /// `z` in `[-depth/2, depth/2) + z_offset`.
    pub fn generate<R: Rng + ?Sized>(preset: &PointCloudPreset, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(preset.count * 3);
        for _ in 0..preset.count {
            positions.push((rng.gen::<f32>() - 0.5) * preset.span);
            positions.push((rng.gen::<f32>() - 0.5) * preset.span);
            positions.push((rng.gen::<f32>() - 0.5) * preset.depth + preset.z_offset);
        }

        Self {
            positions,
            style: PointStyle {
                size: preset.size,
                color: preset.color,
                opacity: preset.opacity,
                additive: preset.additive,
            },
            rotation: Vec3::ZERO,
            spin: preset.spin,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn style(&self) -> PointStyle {
        self.style
    }

    /// Euler XYZ rotation in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Rotation added per tick at `delta_factor == 1`.
    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    pub fn advance(&mut self, delta_factor: f32) {
        self.rotation += self.spin * delta_factor;
    }
}
