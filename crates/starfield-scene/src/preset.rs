//! One resolved preset per session.
//!
//! All profile branching happens in [`ScenePreset::resolve`]. Everything
//! downstream reads plain values.

use std::time::Duration;

use starfield_common::{Color, Vec3};
use starfield_config::colors::parse_color_or;
use starfield_config::schema::{
    HoverConfig, PointCloudSettings, RevealGroupConfig, SectionConfig, SolidKind,
    StarfieldConfig,
};

use crate::device::DeviceProfile;

/// Resolved point cloud parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloudPreset {
    pub count: usize,
    pub size: f32,
    pub span: f32,
    pub depth: f32,
    pub z_offset: f32,
    pub color: Color,
    pub opacity: f32,
    pub additive: bool,
    pub spin: Vec3,
}

impl PointCloudPreset {
    fn resolve(settings: &PointCloudSettings, reduced: bool, fallback: Color) -> Self {
        Self {
            count: settings.count.select(reduced) as usize,
            size: settings.size.select(reduced),
            span: settings.span,
            depth: settings.depth,
            z_offset: settings.z_offset,
            color: parse_color_or(&settings.color, fallback),
            opacity: settings.opacity,
            additive: settings.additive,
            spin: Vec3::from_array(settings.spin),
        }
    }
}

/// Planar drift parameters for glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftPreset {
    pub max_speed: f32,
    pub boundary: f32,
}

/// Resolved parameters for a group of floating solids.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidGroupPreset {
    /// Zero when the group is disabled for this profile.
    pub count: usize,
    pub kinds: Vec<SolidKind>,
    pub spread: Vec3,
    pub z_offset: f32,
    pub max_angular_speed: f32,
    /// Start with a random orientation in `[0, π)` per axis.
    pub random_orientation: bool,
    pub drift: Option<DriftPreset>,
    pub color: Color,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPreset {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub base_z: f32,
    pub easing: f32,
    pub pointer_influence: f32,
    pub touch_influence: f32,
    pub scroll_rate: f32,
    pub parallax: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPreset {
    pub animation_speed: f32,
    pub frame_rate: u32,
    pub frame_rate_independent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPreset {
    pub background: Color,
    pub fog_color: Color,
    pub fog_density: f32,
    pub max_pixel_ratio: f32,
    pub antialias: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagePreset {
    pub sections: Vec<SectionConfig>,
    pub home_section: String,
    pub nav_offset: f32,
    pub reveal_groups: Vec<RevealGroupConfig>,
    pub reveal_threshold: f32,
    pub reveal_margin: f32,
    pub parallax: bool,
    pub hero_parallax_rate: f32,
    pub hero_fade_distance: f32,
    pub nav_debounce: Duration,
    pub touch_debounce: Duration,
    pub loading_delay: Duration,
    pub smooth_scroll: Duration,
    pub wheel_line_px: f32,
    /// `None` on touch-first hosts.
    pub hover: Option<HoverConfig>,
    pub hover_group: String,
}

/// Every profile-dependent value the session needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePreset {
    pub profile: DeviceProfile,
    pub stars: PointCloudPreset,
    pub particles: PointCloudPreset,
    pub glyphs: SolidGroupPreset,
    pub shapes: SolidGroupPreset,
    pub camera: CameraPreset,
    pub motion: MotionPreset,
    pub render: RenderPreset,
    pub page: PagePreset,
}

impl ScenePreset {
    pub fn resolve(config: &StarfieldConfig, profile: DeviceProfile) -> Self {
        let constrained = profile.constrained;
        let low_perf = profile.low_performance();

        let glyphs = &config.glyphs;
        let show_glyphs = glyphs.enabled && (!constrained || glyphs.show_on_constrained);
        let shapes = &config.shapes;
        let show_shapes = shapes.enabled && (!constrained || shapes.show_on_constrained);

        let cam = &config.camera;
        let page = &config.page;
        let parallax = page.parallax.select(constrained);

        Self {
            profile,
            stars: PointCloudPreset::resolve(
                &(&config.stars).into(),
                constrained,
                Color::WHITE,
            ),
            particles: PointCloudPreset::resolve(
                &(&config.particles).into(),
                constrained,
                Color::from_rgba(0, 240, 255, 255),
            ),
            glyphs: SolidGroupPreset {
                count: if show_glyphs {
                    glyphs.count.select(low_perf) as usize
                } else {
                    0
                },
                kinds: glyphs.kinds.clone(),
                spread: Vec3::from_array(glyphs.spread),
                z_offset: glyphs.z_offset,
                max_angular_speed: glyphs.max_angular_speed,
                random_orientation: true,
                drift: Some(DriftPreset {
                    max_speed: glyphs.max_drift_speed,
                    boundary: glyphs.boundary,
                }),
                color: parse_color_or(&glyphs.color, Color::from_rgba(0, 240, 255, 255)),
                opacity: glyphs.opacity,
            },
            shapes: SolidGroupPreset {
                count: if show_shapes {
                    shapes.count.select(low_perf) as usize
                } else {
                    0
                },
                kinds: shapes.kinds.clone(),
                spread: Vec3::from_array(shapes.spread),
                z_offset: shapes.z_offset,
                max_angular_speed: shapes.max_angular_speed,
                random_orientation: false,
                drift: None,
                color: parse_color_or(&shapes.color, Color::from_rgba(0, 102, 255, 255)),
                opacity: shapes.opacity,
            },
            camera: CameraPreset {
                fov_y: cam.fov_degrees.to_radians(),
                near: cam.near,
                far: cam.far,
                base_z: cam.base_z,
                easing: cam.easing.select(constrained),
                pointer_influence: cam.pointer_influence.select(constrained),
                touch_influence: cam.touch_influence,
                scroll_rate: cam.scroll_rate,
                parallax,
            },
            motion: MotionPreset {
                animation_speed: config.motion.animation_speed.select(constrained),
                frame_rate: config.motion.frame_rate,
                frame_rate_independent: config.motion.frame_rate_independent,
            },
            render: RenderPreset {
                background: parse_color_or(
                    &config.render.background,
                    Color::from_rgba(10, 10, 15, 255),
                ),
                fog_color: parse_color_or(
                    &config.render.fog_color,
                    Color::from_rgba(10, 10, 15, 255),
                ),
                fog_density: config.render.fog_density,
                max_pixel_ratio: config.render.max_pixel_ratio.select(constrained),
                antialias: config.render.antialias.select(constrained),
            },
            page: PagePreset {
                sections: page.sections.clone(),
                home_section: page.home_section.clone(),
                nav_offset: page.nav_offset,
                reveal_groups: page.reveal_groups.clone(),
                reveal_threshold: page.reveal_threshold.select(constrained),
                reveal_margin: page.reveal_margin.select(constrained),
                parallax,
                hero_parallax_rate: page.hero_parallax_rate,
                hero_fade_distance: page.hero_fade_distance,
                nav_debounce: Duration::from_millis(page.nav_debounce_ms.select(constrained)),
                touch_debounce: Duration::from_millis(page.touch_debounce_ms),
                loading_delay: Duration::from_millis(page.loading_delay_ms.select(constrained)),
                smooth_scroll: Duration::from_millis(page.smooth_scroll_ms),
                wheel_line_px: page.wheel_line_px,
                hover: (!profile.touch_input).then_some(page.hover),
                hover_group: page.hover_group.clone(),
            },
        }
    }

    /// Number of objects the scene will hold, for the startup log.
    pub fn object_count(&self) -> usize {
        self.stars.count + self.particles.count + self.glyphs.count + self.shapes.count
    }
}

// =============================================================================
// Tests
// =============================================================================
