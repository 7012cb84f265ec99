use std::time::{Duration, Instant};

use starfield_config::StarfieldConfig;

use super::*;
use crate::device::DeviceProfile;
use crate::preset::ScenePreset;

const MS: Duration = Duration::from_millis(1);

fn page(profile: DeviceProfile, now: Instant) -> PageState {
    let preset = ScenePreset::resolve(&StarfieldConfig::default(), profile);
    PageState::new(&preset.page, 800.0, now)
}

#[test]
fn first_update_reports_initial_state() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    let u = p.update(t0);
    assert_eq!(u.scrolled_to, Some(0.0));
    assert!(!u.nav_changed);
    assert_eq!(p.active_section(), Some("home"));
    assert_eq!(u.hero, Some(HeroTransform { translate_y: 0.0, opacity: 1.0 }));
    assert!(u.revealed.is_empty());

    let u = p.update(t0 + MS);
    assert!(u.is_empty());
}

#[test]
fn scroll_is_clamped_to_page() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    assert!((p.max_scroll() - 3700.0).abs() < 1e-3);
    p.scroll_by(-50.0);
    assert_eq!(p.scroll_y(), 0.0);
    p.scroll_by(1_000_000.0);
    assert!((p.scroll_y() - 3700.0).abs() < 1e-3);
}

#[test]
fn wheel_lines_scale_by_line_height() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    p.scroll_lines(3.0);
    assert!((p.scroll_y() - 300.0).abs() < 1e-4);
}

#[test]
fn scrolling_updates_nav_reveal_and_hero() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    p.update(t0);

    p.scroll_by(1000.0);
    let u = p.update(t0 + 16 * MS);
    assert_eq!(u.scrolled_to, Some(1000.0));
    assert!(u.nav_changed);
    assert_eq!(p.active_section(), Some("about"));
    assert!(u.revealed.iter().any(|r| r.group == "about-card"));
    let hero = u.hero.unwrap();
    assert!((hero.translate_y - 300.0).abs() < 1e-3);
    assert!(hero.opacity < 0.0);
}

#[test]
fn constrained_nav_is_debounced() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::CONSTRAINED, t0);
    p.update(t0);

    p.scroll_by(1000.0);
    let u = p.update(t0 + 10 * MS);
    assert!(!u.nav_changed);
    assert!(u.hero.is_none());
    assert_eq!(p.active_section(), Some("home"));

    p.scroll_by(900.0);
    assert!(!p.update(t0 + 60 * MS).nav_changed);
    assert!(!p.update(t0 + 159 * MS).nav_changed);
    assert!(p.update(t0 + 160 * MS).nav_changed);
    assert_eq!(p.active_section(), Some("projects"));
}

#[test]
fn smooth_scroll_lands_on_section() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    p.update(t0);

    assert!(p.scroll_to("projects", t0));
    assert!(p.is_animating());
    let u = p.update(t0 + 300 * MS);
    let mid = u.scrolled_to.unwrap();
    assert!(mid > 0.0 && mid < 1800.0);

    p.update(t0 + 600 * MS);
    assert!(!p.is_animating());
    assert_eq!(p.scroll_y(), 1800.0);
    assert_eq!(p.active_section(), Some("projects"));
}

#[test]
fn home_and_index_targets() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    p.scroll_by(2500.0);
    assert!(p.scroll_home(t0));
    p.update(t0 + 700 * MS);
    assert_eq!(p.scroll_y(), 0.0);

    assert!(p.scroll_to_index(3, t0 + 700 * MS));
    p.update(t0 + 1400 * MS);
    assert_eq!(p.scroll_y(), 3000.0);
    assert!(!p.scroll_to_index(9, t0));
}

#[test]
fn unknown_target_is_ignored() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    assert!(!p.scroll_to("blog", t0));
    assert!(!p.is_animating());
}

#[test]
fn manual_scroll_cancels_smooth_scroll() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    p.scroll_to("contact", t0);
    // Contact starts past the last full screen
    assert_eq!(p.scroll_target(), Some(3700.0));
    p.scroll_by(10.0);
    assert!(!p.is_animating());
    assert_eq!(p.scroll_target(), None);
    p.update(t0 + 1000 * MS);
    assert_eq!(p.scroll_y(), 10.0);
}

#[test]
fn loading_screen_hides_per_profile() {
    let t0 = Instant::now();
    let mut full = page(DeviceProfile::FULL, t0);
    assert!(!full.update(t0 + 1499 * MS).loading_finished);
    assert!(full.update(t0 + 1500 * MS).loading_finished);
    assert!(!full.is_loading());

    let mut small = page(DeviceProfile::CONSTRAINED, t0);
    assert!(small.update(t0 + 1000 * MS).loading_finished);
}

#[test]
fn next_deadline_tracks_timers() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::CONSTRAINED, t0);
    assert_eq!(p.next_deadline(), Some(t0 + 1000 * MS));
    p.update(t0 + 1000 * MS);
    // Initial nav push is still waiting out its debounce
    assert_eq!(p.next_deadline(), Some(t0 + 1100 * MS));
    p.update(t0 + 1100 * MS);
    assert_eq!(p.next_deadline(), None);
}

#[test]
fn hover_tracks_project_cards_on_pointer_hosts() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    p.scroll_by(1800.0);
    let lifted = p.hover_at(200.0).unwrap();
    assert!((lifted.translate_y + 10.0).abs() < 1e-6);
    assert!((lifted.scale - 1.02).abs() < 1e-6);
    assert_eq!(p.hovered(), Some(("project-card", 0)));
    assert_eq!(p.hover_at(210.0), None);
    assert_eq!(p.hover_at(-900.0), Some(CardTransform::IDENTITY));
    assert_eq!(p.hovered(), None);

    let mut touch = page(DeviceProfile::CONSTRAINED, t0);
    assert!(!touch.hover_enabled());
    assert_eq!(touch.hover_at(100.0), None);
}

#[test]
fn hover_ignores_about_cards_and_skill_orbs() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);

    // About card 0 spans 1050..1330
    p.scroll_by(1000.0);
    assert_eq!(p.hover_at(100.0), None);
    assert_eq!(p.hovered(), None);

    // Skill orb 0 spans 3150..3310
    p.scroll_by(2100.0);
    assert_eq!(p.scroll_y(), 3100.0);
    assert_eq!(p.hover_at(60.0), None);
    assert_eq!(p.hovered(), None);
}

#[test]
fn resize_rechecks_reveal() {
    let t0 = Instant::now();
    let mut p = page(DeviceProfile::FULL, t0);
    p.update(t0);
    p.set_viewport_height(1400.0);
    let u = p.update(t0 + MS);
    assert!(u.revealed.iter().any(|r| r.group == "about-card"));
}
