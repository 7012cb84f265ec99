//! Full configuration validation.
//!
//! Validates numeric ranges, color formats and page layout. Each domain has
//! its own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod helpers;
mod page;
mod points;
mod solids;
mod view;


use crate::schema::StarfieldConfig;
use starfield_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StarfieldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    points::validate_point_cloud(&mut errors, "stars", &(&config.stars).into());
    points::validate_point_cloud(&mut errors, "particles", &(&config.particles).into());
    solids::validate_glyphs(&mut errors, config);
    solids::validate_shapes(&mut errors, config);
    view::validate_camera(&mut errors, config);
    view::validate_motion(&mut errors, config);
    view::validate_render(&mut errors, config);
    page::validate_page(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
