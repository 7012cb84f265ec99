//! Window title management: reflects the active section.

use super::core::StarfieldApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

/// Format: "Starfield | {section}", or "Starfield | loading" while the
/// loading screen is up.
pub(super) fn window_title(active_section: Option<&str>, loading: bool) -> String {
    match (loading, active_section) {
        (true, _) => "Starfield | loading".to_string(),
        (false, Some(id)) => format!("Starfield | {id}"),
        (false, None) => "Starfield".to_string(),
    }
}

impl StarfieldApp {
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let Some(ref session) = self.session else {
            return;
        };

        window.set_title(&window_title(
            session.page.active_section(),
            session.page.is_loading(),
        ));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use starfield_config::StarfieldConfig;

    #[test]
    fn update_title_without_window_does_not_panic() {
        let app = StarfieldApp::new(StarfieldConfig::default(), Some(7));
        app.update_window_title();
    }

    #[test]
    fn title_shows_active_section() {
        assert_eq!(window_title(Some("projects"), false), "Starfield | projects");
    }

    #[test]
    fn title_while_loading() {
        assert_eq!(window_title(Some("home"), true), "Starfield | loading");
    }

    #[test]
    fn title_without_section() {
        assert_eq!(window_title(None, false), "Starfield");
    }
}
