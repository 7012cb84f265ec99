//! Floating wireframe solids: glyphs drift and tumble, shapes only tumble.

use std::f32::consts::PI;

use rand::Rng;
use starfield_common::{Color, Vec3};
use starfield_config::schema::SolidKind;

use crate::preset::SolidGroupPreset;

/// Planar drift with reflection at `±boundary` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub velocity: [f32; 2],
    pub boundary: f32,
}

impl Drift {
    /// Move `position` by one tick and reflect each axis that ended up past
    /// the boundary while still heading outward.
    fn step(&mut self, position: &mut Vec3, delta_factor: f32) {
        position.x += self.velocity[0] * delta_factor;
        position.y += self.velocity[1] * delta_factor;

        for (coord, v) in [position.x, position.y].into_iter().zip(&mut self.velocity) {
            if coord.abs() > self.boundary && coord * *v > 0.0 {
                *v = -*v;
            }
        }
    }
}

/// One glyph or shape instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingSolid {
    /// Index into the owning group's kind list.
    pub kind: usize,
    pub position: Vec3,
    /// Euler XYZ in radians.
    pub rotation: Vec3,
    pub angular_velocity: Vec3,
    pub drift: Option<Drift>,
}

impl FloatingSolid {
    /// Sample one solid from a group preset. An empty kind list yields kind 0.
    pub fn spawn<R: Rng + ?Sized>(preset: &SolidGroupPreset, rng: &mut R) -> Self {
        let kinds = preset.kinds.len().max(1);
        let kind = ((rng.gen::<f32>() * kinds as f32) as usize).min(kinds - 1);

        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * preset.spread.x,
            (rng.gen::<f32>() - 0.5) * preset.spread.y,
            (rng.gen::<f32>() - 0.5) * preset.spread.z + preset.z_offset,
        );

        let rotation = if preset.random_orientation {
            Vec3::new(
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
            )
        } else {
            Vec3::ZERO
        };

        let w = preset.max_angular_speed;
        let angular_velocity = Vec3::new(
            (rng.gen::<f32>() - 0.5) * w,
            (rng.gen::<f32>() - 0.5) * w,
            (rng.gen::<f32>() - 0.5) * w,
        );

        let drift = preset.drift.map(|d| Drift {
            velocity: [
                (rng.gen::<f32>() - 0.5) * d.max_speed,
                (rng.gen::<f32>() - 0.5) * d.max_speed,
            ],
            boundary: d.boundary,
        });

        Self {
            kind,
            position,
            rotation,
            angular_velocity,
            drift,
        }
    }

    pub fn spawn_group<R: Rng + ?Sized>(preset: &SolidGroupPreset, rng: &mut R) -> Vec<Self> {
        (0..preset.count).map(|_| Self::spawn(preset, rng)).collect()
    }

    pub fn advance(&mut self, delta_factor: f32) {
        self.rotation += self.angular_velocity * delta_factor;
        if let Some(drift) = self.drift.as_mut() {
            drift.step(&mut self.position, delta_factor);
        }
    }
}

/// A set of solids sharing a kind palette and draw style.
#[derive(Debug, Clone)]
pub struct SolidGroup {
    kinds: Vec<SolidKind>,
    color: Color,
    opacity: f32,
    solids: Vec<FloatingSolid>,
}

impl SolidGroup {
    pub fn generate<R: Rng + ?Sized>(preset: &SolidGroupPreset, rng: &mut R) -> Self {
        Self {
            kinds: preset.kinds.clone(),
            color: preset.color,
            opacity: preset.opacity,
            solids: FloatingSolid::spawn_group(preset, rng),
        }
    }

    pub fn kinds(&self) -> &[SolidKind] {
        &self.kinds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn solids(&self) -> &[FloatingSolid] {
        &self.solids
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn advance(&mut self, delta_factor: f32) {
        for solid in &mut self.solids {
            solid.advance(delta_factor);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
