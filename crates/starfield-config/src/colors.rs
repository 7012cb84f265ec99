//! Color string parsing for config values.

use regex::Regex;
use starfield_common::Color;
use std::sync::LazyLock;

/// Regex for hex color: #RRGGBB or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Whether `s` is a `#RRGGBB` / `#RRGGBBAA` color.
pub fn is_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// Parse a config color, falling back to `fallback` (with a warning) when the
/// string is malformed.
pub fn parse_color_or(s: &str, fallback: Color) -> Color {
    if !is_hex_color(s) {
        tracing::warn!("invalid color '{s}', using {}", fallback.to_hex());
        return fallback;
    }
    Color::from_hex(s).unwrap_or(fallback)
}
