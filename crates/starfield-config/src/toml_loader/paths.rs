use std::path::{Path, PathBuf};

use starfield_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "starfield";
const FILE_NAME: &str = "config.toml";

/// `config.toml` under the platform config directory
/// (`~/.config/starfield` on Linux, `~/Library/Application Support/starfield` on macOS).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_path_in(dirs::config_dir())
}

pub(super) fn config_path_in(config_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    config_dir
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented default template, creating parent directories.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_err)?;

    info!(path = %path.display(), "Wrote default config");
    Ok(())
}
