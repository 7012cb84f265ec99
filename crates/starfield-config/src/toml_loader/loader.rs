use std::io::ErrorKind;
use std::path::Path;

use starfield_common::ConfigError;
use tracing::{info, warn};

use super::paths::{default_config_path, write_default_config};
use crate::schema::StarfieldConfig;
use crate::validation;

/// Parse TOML text. Missing fields take their defaults. Validation problems
/// are only logged here; [`crate::load_config`] is where they become errors.
pub fn parse_toml(text: &str) -> Result<StarfieldConfig, ConfigError> {
    let config: StarfieldConfig =
        toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{e}");
    }
    Ok(config)
}

pub fn load_from_path(path: &Path) -> Result<StarfieldConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config = parse_toml(&text)?;
    info!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// Load `<config dir>/starfield/config.toml`, writing the commented template
/// there first if nothing exists yet.
pub fn load_default() -> Result<StarfieldConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_default_config(&path)?;
            Ok(StarfieldConfig::default())
        }
        other => other,
    }
}
