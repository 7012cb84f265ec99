//! The scene session: owns every animated object plus pointer and viewport
//! state, and advances them once per frame.

use rand::Rng;
use tracing::{debug, info};

use crate::camera::CameraRig;
use crate::point_cloud::PointCloud;
use crate::preset::{CameraPreset, ScenePreset};
use crate::solid::SolidGroup;

/// Viewport size in logical px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Draws a scene snapshot. Implemented by the GPU renderer and by test
/// doubles.
pub trait SceneRenderer {
    type Error;

    fn render_scene(&mut self, scene: &SceneAnimator) -> Result<(), Self::Error>;
}

/// All per-session animation state.
pub struct SceneAnimator {
    stars: PointCloud,
    particles: PointCloud,
    glyphs: SolidGroup,
    shapes: SolidGroup,
    camera: CameraRig,
    tuning: CameraPreset,
    half_width: f32,
    half_height: f32,
    /// Pointer offset from the viewport center, already scaled by influence.
    pointer: (f32, f32),
    scroll_y: f32,
    ticks: u64,
}

impl SceneAnimator {
    /// Build every object from the preset. Glyph and shape groups are empty
    /// when the preset disables them.
    pub fn initialize<R: Rng + ?Sized>(
        preset: &ScenePreset,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let stars = PointCloud::generate(&preset.stars, rng);
        let particles = PointCloud::generate(&preset.particles, rng);
        let glyphs = SolidGroup::generate(&preset.glyphs, rng);
        let shapes = SolidGroup::generate(&preset.shapes, rng);

        let mut camera = CameraRig::new(&preset.camera, 1.0);
        camera.set_viewport(viewport.width, viewport.height);

        info!(
            profile = preset.profile.label(),
            stars = stars.len(),
            particles = particles.len(),
            glyphs = glyphs.len(),
            shapes = shapes.len(),
            "Scene initialized"
        );

        Self {
            stars,
            particles,
            glyphs,
            shapes,
            camera,
            tuning: preset.camera,
            half_width: viewport.width / 2.0,
            half_height: viewport.height / 2.0,
            pointer: (0.0, 0.0),
            scroll_y: 0.0,
            ticks: 0,
        }
    }

    /// Advance every object by one tick scaled by `delta_factor`, then ease
    /// the camera toward the pointer.
    pub fn tick(&mut self, delta_factor: f32) {
        self.stars.advance(delta_factor);
        self.particles.advance(delta_factor);
        self.glyphs.advance(delta_factor);
        self.shapes.advance(delta_factor);

        let (px, py) = self.pointer;
        self.camera.ease_toward(px, -py, self.tuning.easing);
        self.ticks += 1;
    }

    /// Tick, then hand the scene to `renderer`.
    pub fn frame<R: SceneRenderer>(
        &mut self,
        delta_factor: f32,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        self.tick(delta_factor);
        renderer.render_scene(self)
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.set_pointer(x, y, self.tuning.pointer_influence);
    }

    pub fn on_touch_move(&mut self, x: f32, y: f32) {
        self.set_pointer(x, y, self.tuning.touch_influence);
    }

    fn set_pointer(&mut self, x: f32, y: f32, influence: f32) {
        self.pointer = (
            (x - self.half_width) * influence,
            (y - self.half_height) * influence,
        );
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.half_width = viewport.width / 2.0;
        self.half_height = viewport.height / 2.0;
        self.camera.set_viewport(viewport.width, viewport.height);
        debug!(width = viewport.width, height = viewport.height, "Scene resized");
    }

    /// Push the camera back with the page scroll when parallax is on.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
        if self.tuning.parallax {
            self.camera.position.z = self.tuning.base_z + scroll_y * self.tuning.scroll_rate;
        }
    }

    // ---- read-back ----

    pub fn stars(&self) -> &PointCloud {
        &self.stars
    }

    pub fn particles(&self) -> &PointCloud {
        &self.particles
    }

    pub fn glyphs(&self) -> &SolidGroup {
        &self.glyphs
    }

    pub fn shapes(&self) -> &SolidGroup {
        &self.shapes
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn half_extents(&self) -> (f32, f32) {
        (self.half_width, self.half_height)
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use starfield_common::Vec3;
    use starfield_config::StarfieldConfig;

    use crate::device::DeviceProfile;

    fn scene(profile: DeviceProfile) -> SceneAnimator {
        let preset = ScenePreset::resolve(&StarfieldConfig::default(), profile);
        let mut rng = StdRng::seed_from_u64(99);
        SceneAnimator::initialize(&preset, Viewport::new(1280.0, 720.0), &mut rng)
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
        last_star_rotation: Vec3,
    }

    impl SceneRenderer for CountingRenderer {
        type Error = String;

        fn render_scene(&mut self, scene: &SceneAnimator) -> Result<(), String> {
            self.frames += 1;
            self.last_star_rotation = scene.stars().rotation();
            Ok(())
        }
    }

    struct FailingRenderer;

    impl SceneRenderer for FailingRenderer {
        type Error = &'static str;

        fn render_scene(&mut self, _scene: &SceneAnimator) -> Result<(), &'static str> {
            Err("surface lost")
        }
    }

    #[test]
    fn counts_match_full_preset() {
        let s = scene(DeviceProfile::FULL);
        assert_eq!(s.stars().len(), 2000);
        assert_eq!(s.particles().len(), 500);
        assert_eq!(s.glyphs().len(), 15);
        assert_eq!(s.shapes().len(), 8);
    }

    #[test]
    fn counts_match_constrained_preset() {
        let s = scene(DeviceProfile::CONSTRAINED);
        assert_eq!(s.stars().len(), 800);
        assert_eq!(s.particles().len(), 150);
        assert!(s.glyphs().is_empty());
        assert!(s.shapes().is_empty());
    }

    #[test]
    fn counts_match_low_concurrency_preset() {
        let s = scene(DeviceProfile {
            low_concurrency: true,
            ..DeviceProfile::FULL
        });
        assert_eq!(s.stars().len(), 2000);
        assert_eq!(s.glyphs().len(), 8);
        assert_eq!(s.shapes().len(), 4);
    }

    #[test]
    fn camera_starts_at_base_z() {
        let s = scene(DeviceProfile::FULL);
        assert_eq!(s.camera().position, Vec3::new(0.0, 0.0, 500.0));
        assert!((s.camera().aspect - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_is_n_times_increment() {
        let mut s = scene(DeviceProfile::FULL);
        let first_shape = s.shapes().solids()[0].clone();
        let n = 1000;
        let f = 0.75;
        for _ in 0..n {
            s.tick(f);
        }

        let star = s.stars().rotation();
        assert!((star.x - 0.0001 * f * n as f32).abs() < 1e-4);
        assert!((star.y - 0.0002 * f * n as f32).abs() < 1e-4);
        assert_eq!(star.z, 0.0);

        let particle = s.particles().rotation();
        assert!((particle.y - 0.0005 * f * n as f32).abs() < 1e-4);
        assert!((particle.z - 0.0003 * f * n as f32).abs() < 1e-4);

        let shape = &s.shapes().solids()[0];
        let expected = first_shape.angular_velocity * (f * n as f32);
        assert!((shape.rotation - expected).length() < 1e-4);
        assert_eq!(s.ticks(), n as u64);
    }

    #[test]
    fn shapes_never_move() {
        let mut s = scene(DeviceProfile::FULL);
        let before: Vec<Vec3> = s.shapes().solids().iter().map(|x| x.position).collect();
        for _ in 0..500 {
            s.tick(1.0);
        }
        let after: Vec<Vec3> = s.shapes().solids().iter().map(|x| x.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn resize_sets_exact_halves() {
        let mut s = scene(DeviceProfile::FULL);
        s.on_resize(Viewport::new(1001.0, 333.0));
        assert_eq!(s.half_extents(), (500.5, 166.5));
        assert!((s.camera().aspect - 1001.0 / 333.0).abs() < 1e-6);
    }

    #[test]
    fn resize_to_zero_height_keeps_aspect() {
        let mut s = scene(DeviceProfile::FULL);
        let aspect = s.camera().aspect;
        s.on_resize(Viewport::new(640.0, 0.0));
        assert_eq!(s.half_extents(), (320.0, 0.0));
        assert_eq!(s.camera().aspect, aspect);
    }

    #[test]
    fn pointer_is_centered_and_scaled() {
        let mut s = scene(DeviceProfile::FULL);
        s.on_pointer_move(740.0, 260.0);
        let (px, py) = s.pointer();
        assert!((px - 5.0).abs() < 1e-6);
        assert!((py + 5.0).abs() < 1e-6);

        s.on_touch_move(740.0, 260.0);
        let (px, _) = s.pointer();
        assert!((px - 2.0).abs() < 1e-6);
    }

    #[test]
    fn pointer_is_not_clamped() {
        let mut s = scene(DeviceProfile::FULL);
        s.on_pointer_move(100_640.0, 360.0);
        assert!((s.pointer().0 - 5000.0).abs() < 1e-3);
    }

    #[test]
    fn camera_eases_with_inverted_y() {
        let mut s = scene(DeviceProfile::FULL);
        s.on_pointer_move(740.0, 260.0);
        s.tick(1.0);
        let cam = s.camera().position;
        assert!((cam.x - 0.1).abs() < 1e-6);
        assert!((cam.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn easing_ignores_delta_factor() {
        let mut a = scene(DeviceProfile::FULL);
        let mut b = scene(DeviceProfile::FULL);
        a.on_pointer_move(0.0, 0.0);
        b.on_pointer_move(0.0, 0.0);
        a.tick(0.25);
        b.tick(4.0);
        assert_eq!(a.camera().position.x, b.camera().position.x);
    }

    #[test]
    fn scroll_moves_camera_back_with_parallax() {
        let mut s = scene(DeviceProfile::FULL);
        s.on_scroll(1200.0);
        assert!((s.camera().position.z - 620.0).abs() < 1e-4);
        assert!((s.scroll_y() - 1200.0).abs() < 1e-6);
    }

    #[test]
    fn scroll_ignored_without_parallax() {
        let mut s = scene(DeviceProfile::CONSTRAINED);
        s.on_scroll(1200.0);
        assert!((s.camera().position.z - 500.0).abs() < 1e-6);
    }

    #[test]
    fn glyphs_reflect_at_boundary_over_time() {
        let mut s = scene(DeviceProfile::FULL);
        for _ in 0..50_000 {
            s.tick(1.0);
            for g in s.glyphs().solids() {
                assert!(g.position.x.abs() <= 600.1);
                assert!(g.position.y.abs() <= 600.1);
            }
        }
    }

    #[test]
    fn frame_ticks_then_renders() {
        let mut s = scene(DeviceProfile::FULL);
        let mut r = CountingRenderer::default();
        s.frame(1.0, &mut r).unwrap();
        s.frame(1.0, &mut r).unwrap();
        assert_eq!(r.frames, 2);
        assert_eq!(r.last_star_rotation, s.stars().rotation());
        assert!(r.last_star_rotation.y > 0.0);
    }

    #[test]
    fn frame_surfaces_renderer_errors() {
        let mut s = scene(DeviceProfile::FULL);
        assert_eq!(s.frame(1.0, &mut FailingRenderer), Err("surface lost"));
        assert_eq!(s.ticks(), 1);
    }
}
