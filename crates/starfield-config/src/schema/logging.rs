//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging settings. `--log-level` on the command line wins over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log the welcome lines at startup.
    pub welcome_banner: bool,
    /// Seconds between FPS debug lines; 0 disables them.
    pub fps_report_secs: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            welcome_banner: true,
            fps_report_secs: 5,
        }
    }
}
