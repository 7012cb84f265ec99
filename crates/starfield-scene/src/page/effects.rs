//! Scroll-linked hero parallax and card hover lift.

use starfield_config::schema::HoverConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub translate_y: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub rate: f32,
    pub fade_distance: f32,
}

impl HeroParallax {
    /// Opacity is left unclamped; it goes negative past the fade distance.
    pub fn transform(&self, scroll_y: f32) -> HeroTransform {
        HeroTransform {
            translate_y: scroll_y * self.rate,
            opacity: 1.0 - scroll_y / self.fade_distance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_y: f32,
    pub scale: f32,
}

impl CardTransform {
    pub const IDENTITY: Self = Self {
        translate_y: 0.0,
        scale: 1.0,
    };
}

/// Hover lift for cards; `None` disables it on touch-first hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardHover(pub Option<HoverConfig>);

impl CardHover {
    pub fn transform(&self, hovered: bool) -> CardTransform {
        match self.0 {
            Some(h) if hovered => CardTransform {
                translate_y: h.lift,
                scale: h.scale,
            },
            _ => CardTransform::IDENTITY,
        }
    }

    pub fn enabled(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_moves_and_fades() {
        let p = HeroParallax {
            rate: 0.3,
            fade_distance: 600.0,
        };
        let t = p.transform(300.0);
        assert!((t.translate_y - 90.0).abs() < 1e-4);
        assert!((t.opacity - 0.5).abs() < 1e-6);
        assert!(p.transform(900.0).opacity < 0.0);
        assert_eq!(p.transform(0.0).opacity, 1.0);
    }

    #[test]
    fn hover_lift_only_when_enabled() {
        let on = CardHover(Some(HoverConfig::default()));
        let t = on.transform(true);
        assert!((t.translate_y + 10.0).abs() < 1e-6);
        assert!((t.scale - 1.02).abs() < 1e-6);
        assert_eq!(on.transform(false), CardTransform::IDENTITY);

        let off = CardHover(None);
        assert!(!off.enabled());
        assert_eq!(off.transform(true), CardTransform::IDENTITY);
    }
}
