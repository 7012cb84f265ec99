//! Starfield configuration system.
//!
//! TOML-based configuration with full validation. Every section uses serde
//! defaults equal to the stock backdrop constants, so an empty file (or
//! no file at all) reproduces the stock scene.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use starfield_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{StarfieldConfig, CONFIG_SCHEMA_VERSION};

use starfield_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path when
/// `path` is `None`, then validate the result.
pub fn load_config(path: Option<&Path>) -> Result<StarfieldConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &StarfieldConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = StarfieldConfig::default();
        let json = config_to_json(&config);
        for section in [
            "\"device\"",
            "\"stars\"",
            "\"particles\"",
            "\"glyphs\"",
            "\"shapes\"",
            "\"camera\"",
            "\"motion\"",
            "\"render\"",
            "\"page\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = StarfieldConfig::default();
        let json = config_to_json(&config);
        let parsed: StarfieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.stars.count.full, 2000);
        assert_eq!(parsed.particles.color, "#00f0ff");
        assert_eq!(parsed.page.sections.len(), config.page.sections.len());
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[stars]\nopacity = 4.0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("stars.opacity"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
