//! Page layout validation.

use std::collections::HashSet;

use crate::schema::StarfieldConfig;

use super::helpers::{validate_range_f32, validate_tiered_range_f32};

pub(crate) fn validate_page(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let p = &config.page;

    let mut seen = HashSet::new();
    for section in &p.sections {
        if section.id.is_empty() {
            errors.push("page.sections: section id must not be empty".into());
        } else if !seen.insert(section.id.as_str()) {
            errors.push(format!("page.sections: duplicate section id '{}'", section.id));
        }
        if section.top < 0.0 || section.height < 0.0 {
            errors.push(format!(
                "page.sections['{}']: top and height must be non-negative",
                section.id
            ));
        }
    }

    if !p.sections.is_empty() && !seen.contains(p.home_section.as_str()) {
        errors.push(format!(
            "page.home_section = \"{}\" does not name a section",
            p.home_section
        ));
    }

    for group in &p.reveal_groups {
        validate_range_f32(
            errors,
            &format!("page.reveal_groups['{}'].stagger_secs", group.name),
            group.stagger_secs,
            0.0,
            10.0,
        );
        if group.items.iter().any(|i| i.height <= 0.0) {
            errors.push(format!(
                "page.reveal_groups['{}']: item heights must be positive",
                group.name
            ));
        }
    }

    validate_tiered_range_f32(errors, "page.reveal_threshold", &p.reveal_threshold, 0.0, 1.0);
    validate_tiered_range_f32(errors, "page.reveal_margin", &p.reveal_margin, 0.0, 10_000.0);
    validate_range_f32(errors, "page.nav_offset", p.nav_offset, 0.0, 10_000.0);
    if p.hero_fade_distance <= 0.0 {
        errors.push("page.hero_fade_distance must be positive".into());
    }
    validate_range_f32(errors, "page.wheel_line_px", p.wheel_line_px, 1.0, 1000.0);

    if !p.reveal_groups.is_empty() && !p.reveal_groups.iter().any(|g| g.name == p.hover_group) {
        errors.push(format!(
            "page.hover_group = \"{}\" does not name a reveal group",
            p.hover_group
        ));
    }
}
