use starfield_config::schema::SectionConfig;

/// Tracks which section the nav bar highlights.
#[derive(Debug, Clone)]
pub struct NavTracker {
    sections: Vec<SectionConfig>,
    offset: f32,
    active: Option<usize>,
}

impl NavTracker {
    pub fn new(sections: Vec<SectionConfig>, offset: f32) -> Self {
        Self {
            sections,
            offset,
            active: None,
        }
    }

    /// The last section, in document order, whose top minus the offset is
    /// at or above `scroll_y`.
    pub fn resolve(&self, scroll_y: f32) -> Option<usize> {
        self.sections
            .iter()
            .rposition(|s| scroll_y >= s.top - self.offset)
    }

    /// Recompute the active section. Returns `true` when it changed.
    pub fn update(&mut self, scroll_y: f32) -> bool {
        let next = self.resolve(scroll_y);
        let changed = next != self.active;
        self.active = next;
        changed
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].id.as_str())
    }

    pub fn sections(&self) -> &[SectionConfig] {
        &self.sections
    }

    pub fn find(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Bottom edge of the lowest section.
    pub fn page_height(&self) -> f32 {
        self.sections
            .iter()
            .map(|s| s.top + s.height)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfield_config::schema::PageConfig;

    fn tracker() -> NavTracker {
        NavTracker::new(PageConfig::default().sections, 200.0)
    }

    #[test]
    fn top_of_page_is_home() {
        let t = tracker();
        assert_eq!(t.resolve(0.0), Some(0));
    }

    #[test]
    fn switches_two_hundred_px_early() {
        let t = tracker();
        assert_eq!(t.resolve(699.0), Some(0));
        assert_eq!(t.resolve(700.0), Some(1));
        assert_eq!(t.resolve(1600.0), Some(2));
        assert_eq!(t.resolve(10_000.0), Some(4));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let sections = vec![SectionConfig {
            id: "late".into(),
            top: 500.0,
            height: 100.0,
        }];
        let t = NavTracker::new(sections, 200.0);
        assert_eq!(t.resolve(299.0), None);
        assert_eq!(t.resolve(300.0), Some(0));
    }

    #[test]
    fn update_reports_changes_only() {
        let mut t = tracker();
        assert!(t.update(0.0));
        assert_eq!(t.active_id(), Some("home"));
        assert!(!t.update(100.0));
        assert!(t.update(2900.0));
        assert_eq!(t.active_id(), Some("skills"));
    }

    #[test]
    fn page_height_is_lowest_bottom() {
        assert!((tracker().page_height() - 4500.0).abs() < 1e-3);
        assert_eq!(tracker().find("contact").map(|s| s.top), Some(3800.0));
    }
}
