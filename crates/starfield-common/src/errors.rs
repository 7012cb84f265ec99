use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no platform config directory")]
    NoConfigDir,

    #[error("config I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StarfieldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("stars.opacity out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: stars.opacity out of range"
        );

        assert_eq!(ConfigError::NoConfigDir.to_string(), "no platform config directory");

        let err = ConfigError::Io {
            path: PathBuf::from("/ro/config.toml"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("config I/O error at /ro/config.toml"));
    }

    #[test]
    fn starfield_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: StarfieldError = config_err.into();
        assert!(matches!(err, StarfieldError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn starfield_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StarfieldError = io_err.into();
        assert!(matches!(err, StarfieldError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn starfield_error_other_variants() {
        let err = StarfieldError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = StarfieldError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = StarfieldError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
