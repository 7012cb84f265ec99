use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Normalized sRGB channels in `0.0..=1.0`, alpha dropped.
    pub fn to_rgb_f32(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Linear-light channels for sRGB render targets.
    pub fn to_linear_rgb(&self) -> [f32; 3] {
        let [r, g, b] = self.to_rgb_f32();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
    }
}

/// sRGB → linear conversion for a single channel.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_with_and_without_hash() {
        assert_eq!(
            Color::from_hex("#00f0ff"),
            Some(Color::from_rgba(0, 240, 255, 255))
        );
        assert_eq!(
            Color::from_hex("0066ff"),
            Some(Color::from_rgba(0, 102, 255, 255))
        );
    }

    #[test]
    fn from_hex_with_alpha() {
        let c = Color::from_hex("#0a0a0f80").unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.to_hex(), "#0a0a0f80");
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
    }

    #[test]
    fn to_rgb_f32_normalizes() {
        let [r, g, b] = Color::from_rgba(255, 0, 51, 255).to_rgb_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn linear_conversion_endpoints() {
        assert!(srgb_to_linear(0.0).abs() < 1e-6);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        // Mid grey is darker in linear space
        assert!(srgb_to_linear(0.5) < 0.25);
    }
}
