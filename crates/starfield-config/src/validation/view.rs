//! Camera, motion and render validation.

use crate::schema::StarfieldConfig;

use super::helpers::{validate_color, validate_range, validate_range_f32, validate_tiered_range_f32};

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let c = &config.camera;
    validate_range_f32(errors, "camera.fov_degrees", c.fov_degrees, 10.0, 170.0);
    if c.near <= 0.0 {
        errors.push(format!("camera.near = {} must be positive", c.near));
    }
    if c.far <= c.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            c.far, c.near
        ));
    }
    validate_tiered_range_f32(errors, "camera.easing", &c.easing, 0.0, 1.0);
    validate_tiered_range_f32(errors, "camera.pointer_influence", &c.pointer_influence, 0.0, 10.0);
    validate_range_f32(errors, "camera.touch_influence", c.touch_influence, 0.0, 10.0);
}

pub(crate) fn validate_motion(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let m = &config.motion;
    validate_tiered_range_f32(errors, "motion.animation_speed", &m.animation_speed, 0.0, 10.0);
    // 0 leaves redraws unpaced
    if m.frame_rate != 0 {
        validate_range(errors, "motion.frame_rate", m.frame_rate, 30, 240);
    }
}

pub(crate) fn validate_render(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let r = &config.render;
    validate_color(errors, "render.background", &r.background);
    validate_color(errors, "render.fog_color", &r.fog_color);
    validate_range_f32(errors, "render.fog_density", r.fog_density, 0.0, 0.1);
    validate_tiered_range_f32(errors, "render.max_pixel_ratio", &r.max_pixel_ratio, 0.5, 4.0);
}
