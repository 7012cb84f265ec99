//! Page layout and scroll affordance configuration.

use serde::{Deserialize, Serialize};

use super::Tiered;

/// A navigable page section in document coordinates (logical px).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionConfig {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl SectionConfig {
    fn new(id: &str, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Vertical extent of a revealable element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpanConfig {
    pub top: f32,
    pub height: f32,
}

/// A group of elements that fade in with a per-index stagger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealGroupConfig {
    pub name: String,
    pub stagger_secs: f32,
    pub items: Vec<SpanConfig>,
}

fn grid(top: f32, height: f32, gap: f32, columns: usize, count: usize) -> Vec<SpanConfig> {
    (0..count)
        .map(|i| SpanConfig {
            top: top + (i / columns) as f32 * (height + gap),
            height,
        })
        .collect()
}

/// Hover lift applied to project cards on non-touch hosts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HoverConfig {
    pub lift: f32,
    pub scale: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            lift: -10.0,
            scale: 1.02,
        }
    }
}

/// Page layout and scroll-driven affordances.
///
/// Every `Tiered` field here uses `reduced` on constrained devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub sections: Vec<SectionConfig>,
    /// Section id targeted by home/logo navigation.
    pub home_section: String,
    /// A section becomes active once scrolled to within this many px of its top.
    pub nav_offset: f32,
    pub reveal_groups: Vec<RevealGroupConfig>,
    pub reveal_threshold: Tiered<f32>,
    /// The viewport bottom is pulled up by this much for reveal checks.
    pub reveal_margin: Tiered<f32>,
    pub parallax: Tiered<bool>,
    pub hero_parallax_rate: f32,
    pub hero_fade_distance: f32,
    /// Trailing debounce for nav updates while scrolling; 0 updates immediately.
    pub nav_debounce_ms: Tiered<u64>,
    pub touch_debounce_ms: u64,
    pub loading_delay_ms: Tiered<u64>,
    pub smooth_scroll_ms: u64,
    /// Pixels scrolled per wheel line.
    pub wheel_line_px: f32,
    pub hover: HoverConfig,
    /// Reveal group whose items get the hover lift.
    pub hover_group: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionConfig::new("home", 0.0, 900.0),
                SectionConfig::new("about", 900.0, 900.0),
                SectionConfig::new("projects", 1800.0, 1200.0),
                SectionConfig::new("skills", 3000.0, 800.0),
                SectionConfig::new("contact", 3800.0, 700.0),
            ],
            home_section: "home".into(),
            nav_offset: 200.0,
            reveal_groups: vec![
                RevealGroupConfig {
                    name: "about-card".into(),
                    stagger_secs: 0.1,
                    items: grid(1050.0, 280.0, 40.0, 3, 3),
                },
                RevealGroupConfig {
                    name: "project-card".into(),
                    stagger_secs: 0.15,
                    items: grid(1950.0, 420.0, 40.0, 2, 4),
                },
                RevealGroupConfig {
                    name: "skill-orb".into(),
                    stagger_secs: 0.1,
                    items: grid(3150.0, 160.0, 40.0, 3, 6),
                },
            ],
            reveal_threshold: Tiered::new(0.2, 0.1),
            reveal_margin: Tiered::new(100.0, 50.0),
            parallax: Tiered::new(true, false),
            hero_parallax_rate: 0.3,
            hero_fade_distance: 600.0,
            nav_debounce_ms: Tiered::new(0, 100),
            touch_debounce_ms: 50,
            loading_delay_ms: Tiered::new(1500, 1000),
            smooth_scroll_ms: 600,
            wheel_line_px: 100.0,
            hover: HoverConfig::default(),
            hover_group: "project-card".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sections_are_contiguous() {
        let c = PageConfig::default();
        for pair in c.sections.windows(2) {
            assert!((pair[0].top + pair[0].height - pair[1].top).abs() < f32::EPSILON);
        }
        assert_eq!(c.sections[0].id, c.home_section);
    }

    #[test]
    fn default_reveal_groups() {
        let c = PageConfig::default();
        let names: Vec<&str> = c.reveal_groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["about-card", "project-card", "skill-orb"]);
        assert_eq!(c.reveal_groups[1].items.len(), 4);
        assert!((c.reveal_groups[1].stagger_secs - 0.15).abs() < f32::EPSILON);
        assert_eq!(c.hover_group, "project-card");
    }

    #[test]
    fn grid_wraps_rows() {
        let items = grid(100.0, 50.0, 10.0, 2, 5);
        assert_eq!(items.len(), 5);
        assert!((items[1].top - 100.0).abs() < f32::EPSILON);
        assert!((items[2].top - 160.0).abs() < f32::EPSILON);
        assert!((items[4].top - 220.0).abs() < f32::EPSILON);
    }

    #[test]
    fn profile_tiers_default_timings() {
        let c = PageConfig::default();
        assert_eq!(c.loading_delay_ms, Tiered::new(1500, 1000));
        assert_eq!(c.nav_debounce_ms.reduced, 100);
        assert_eq!(c.touch_debounce_ms, 50);
    }
}
