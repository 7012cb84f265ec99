use std::ops::Range;

use starfield_scene::{SceneAnimator, SolidGroup};

use crate::gpu::shader_rgba;
use crate::matrix;

/// Per-solid instance data. Layout: mat4 + vec4 = 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SolidInstance {
    pub model: [f32; 16],
    /// rgb + opacity.
    pub color: [f32; 4],
}

impl SolidInstance {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SolidInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // model columns
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 0,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 32,
                shader_location: 3,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 48,
                shader_location: 4,
            },
            // color
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 64,
                shader_location: 5,
            },
        ],
    };
}

/// A contiguous run of instances sharing one mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBatch {
    pub mesh: usize,
    pub instances: Range<u32>,
}

/// Mesh index for each group's kinds: glyph kinds first, then shape kinds.
pub fn mesh_offsets(scene: &SceneAnimator) -> [usize; 2] {
    [0, scene.glyphs().kinds().len()]
}

/// Build instances for every solid in the scene, sorted by mesh, along with
/// the batches that draw them.
pub fn build_instances(
    scene: &SceneAnimator,
    srgb_surface: bool,
) -> (Vec<SolidInstance>, Vec<DrawBatch>) {
    let offsets = mesh_offsets(scene);
    let mut tagged: Vec<(usize, SolidInstance)> = Vec::new();

    for (group, offset) in [scene.glyphs(), scene.shapes()].into_iter().zip(offsets) {
        push_group(&mut tagged, group, offset, srgb_surface);
    }
    tagged.sort_by_key(|(mesh, _)| *mesh);

    let mut batches: Vec<DrawBatch> = Vec::new();
    for (i, (mesh, _)) in tagged.iter().enumerate() {
        let i = i as u32;
        match batches.last_mut() {
            Some(b) if b.mesh == *mesh => b.instances.end = i + 1,
            _ => batches.push(DrawBatch {
                mesh: *mesh,
                instances: i..i + 1,
            }),
        }
    }

    (tagged.into_iter().map(|(_, inst)| inst).collect(), batches)
}

fn push_group(
    out: &mut Vec<(usize, SolidInstance)>,
    group: &SolidGroup,
    offset: usize,
    srgb_surface: bool,
) {
    let color = shader_rgba(group.color(), group.opacity(), srgb_surface);
    for solid in group.solids() {
        out.push((
            offset + solid.kind,
            SolidInstance {
                model: matrix::model(solid.position, solid.rotation),
                color,
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use starfield_config::StarfieldConfig;
    use starfield_scene::{DeviceProfile, ScenePreset, Viewport};

    fn scene(profile: DeviceProfile) -> SceneAnimator {
        let preset = ScenePreset::resolve(&StarfieldConfig::default(), profile);
        let mut rng = StdRng::seed_from_u64(5);
        SceneAnimator::initialize(&preset, Viewport::new(1280.0, 720.0), &mut rng)
    }

    #[test]
    fn solid_instance_size_is_80_bytes() {
        assert_eq!(std::mem::size_of::<SolidInstance>(), 80);
    }

    #[test]
    fn every_solid_gets_one_instance() {
        let (instances, batches) = build_instances(&scene(DeviceProfile::FULL), true);
        assert_eq!(instances.len(), 15 + 8);
        let covered: u32 = batches.iter().map(|b| b.instances.len() as u32).sum();
        assert_eq!(covered, 23);
    }

    #[test]
    fn batches_are_sorted_and_contiguous() {
        let (_, batches) = build_instances(&scene(DeviceProfile::FULL), false);
        for pair in batches.windows(2) {
            assert!(pair[0].mesh < pair[1].mesh);
            assert_eq!(pair[0].instances.end, pair[1].instances.start);
        }
        assert!(batches.iter().all(|b| b.mesh < 6));
    }

    #[test]
    fn shapes_use_meshes_after_glyphs() {
        let s = scene(DeviceProfile::FULL);
        assert_eq!(mesh_offsets(&s), [0, 3]);
        let (instances, batches) = build_instances(&s, false);
        let shape_batch = batches.iter().find(|b| b.mesh >= 3).unwrap();
        let first = &instances[shape_batch.instances.start as usize];
        assert!((first.color[3] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn constrained_scene_has_no_instances() {
        let (instances, batches) = build_instances(&scene(DeviceProfile::CONSTRAINED), true);
        assert!(instances.is_empty());
        assert!(batches.is_empty());
    }
}
