//! Scroll-driven page affordances layered over the backdrop.
//!
//! [`PageState`] owns a virtual scroll offset plus the nav, reveal, parallax,
//! loading and hover models, and reports what changed on each
//! [`PageState::update`]. Time is passed in so everything is testable without
//! a clock.

mod debounce;
mod effects;
mod loading;
mod nav;
mod reveal;
mod smooth;

pub use debounce::*;
pub use effects::*;
pub use loading::*;
pub use nav::*;
pub use reveal::*;
pub use smooth::*;

use std::time::{Duration, Instant};

use starfield_config::schema::SectionConfig;
use tracing::debug;

use crate::preset::PagePreset;

/// What changed during one [`PageState::update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageUpdate {
    /// Current offset, set when the scroll or viewport changed since the
    /// last update (and on the first update).
    pub scrolled_to: Option<f32>,
    pub nav_changed: bool,
    pub revealed: Vec<Reveal>,
    pub hero: Option<HeroTransform>,
    pub loading_finished: bool,
}

impl PageUpdate {
    pub fn is_empty(&self) -> bool {
        self.scrolled_to.is_none()
            && !self.nav_changed
            && self.revealed.is_empty()
            && !self.loading_finished
    }
}

pub struct PageState {
    nav: NavTracker,
    nav_debounce: Debounce<()>,
    reveal: RevealTracker,
    hero: Option<HeroParallax>,
    hover: CardHover,
    hover_group: String,
    hovered: Option<(String, usize)>,
    loading: LoadingScreen,
    smooth: Option<SmoothScroll>,
    smooth_duration: Duration,
    home_section: String,
    wheel_line_px: f32,
    scroll_y: f32,
    viewport_height: f32,
    dirty: bool,
}

impl PageState {
    pub fn new(preset: &PagePreset, viewport_height: f32, now: Instant) -> Self {
        let mut nav = NavTracker::new(preset.sections.clone(), preset.nav_offset);
        nav.update(0.0);

        Self {
            nav,
            nav_debounce: Debounce::new(preset.nav_debounce),
            reveal: RevealTracker::new(
                &preset.reveal_groups,
                preset.reveal_threshold,
                preset.reveal_margin,
            ),
            hero: preset.parallax.then_some(HeroParallax {
                rate: preset.hero_parallax_rate,
                fade_distance: preset.hero_fade_distance,
            }),
            hover: CardHover(preset.hover),
            hover_group: preset.hover_group.clone(),
            hovered: None,
            loading: LoadingScreen::new(now, preset.loading_delay),
            smooth: None,
            smooth_duration: preset.smooth_scroll,
            home_section: preset.home_section.clone(),
            wheel_line_px: preset.wheel_line_px,
            scroll_y: 0.0,
            viewport_height,
            // First update reports items already on screen.
            dirty: true,
        }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn max_scroll(&self) -> f32 {
        (self.nav.page_height() - self.viewport_height).max(0.0)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav.active_id()
    }

    pub fn sections(&self) -> &[SectionConfig] {
        self.nav.sections()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_visible()
    }

    pub fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }

    /// Where the running smooth scroll will land.
    pub fn scroll_target(&self) -> Option<f32> {
        self.smooth.map(|s| s.target())
    }

    pub fn hover_enabled(&self) -> bool {
        self.hover.enabled()
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.set_scroll(self.scroll_y);
        self.dirty = true;
    }

    /// Scroll by a pixel delta (positive is down). Cancels any smooth scroll.
    pub fn scroll_by(&mut self, delta: f32) {
        self.smooth = None;
        self.set_scroll(self.scroll_y + delta);
    }

    /// Scroll by wheel lines.
    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll_by(lines * self.wheel_line_px);
    }

    /// Start a smooth scroll to the section named `id`. Unknown ids are
    /// ignored and return `false`.
    pub fn scroll_to(&mut self, id: &str, now: Instant) -> bool {
        let Some(top) = self.nav.find(id).map(|s| s.top) else {
            debug!(id, "Ignoring scroll to unknown section");
            return false;
        };
        let target = top.clamp(0.0, self.max_scroll());
        self.smooth = Some(SmoothScroll::new(
            self.scroll_y,
            target,
            now,
            self.smooth_duration,
        ));
        true
    }

    pub fn scroll_home(&mut self, now: Instant) -> bool {
        let home = self.home_section.clone();
        self.scroll_to(&home, now)
    }

    /// Smooth scroll to the `n`-th section (0-based).
    pub fn scroll_to_index(&mut self, n: usize, now: Instant) -> bool {
        match self.nav.sections().get(n).map(|s| s.id.clone()) {
            Some(id) => self.scroll_to(&id, now),
            None => false,
        }
    }

    /// Track the hover-group card under the pointer at viewport offset `y`.
    /// Items of other reveal groups never lift. Returns the hovered card's
    /// transform when the hovered card changed.
    pub fn hover_at(&mut self, y: f32) -> Option<CardTransform> {
        if !self.hover.enabled() {
            return None;
        }
        let next = self
            .reveal
            .item_at(self.scroll_y + y)
            .filter(|(group, _)| *group == self.hover_group)
            .map(|(group, index)| (group.to_string(), index));
        if next == self.hovered {
            return None;
        }
        self.hovered = next;
        Some(self.hover.transform(self.hovered.is_some()))
    }

    pub fn hovered(&self) -> Option<(&str, usize)> {
        self.hovered.as_ref().map(|(g, i)| (g.as_str(), *i))
    }

    /// Advance timers and animations, then report what changed.
    pub fn update(&mut self, now: Instant) -> PageUpdate {
        let mut out = PageUpdate::default();

        if let Some(smooth) = self.smooth {
            let (y, done) = smooth.sample(now);
            self.set_scroll(y);
            if done {
                self.smooth = None;
            }
        }

        if self.dirty {
            self.dirty = false;
            out.scrolled_to = Some(self.scroll_y);
            self.nav_debounce.push((), now);
            out.revealed = self.reveal.update(self.scroll_y, self.viewport_height);
            out.hero = self.hero.map(|h| h.transform(self.scroll_y));
        }

        if self.nav_debounce.poll(now).is_some() {
            out.nav_changed = self.nav.update(self.scroll_y);
        }

        out.loading_finished = self.loading.poll(now);
        out
    }

    /// Earliest instant a pending timer needs servicing.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.nav_debounce.deadline(), self.loading.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    fn set_scroll(&mut self, y: f32) {
        let y = y.clamp(0.0, self.max_scroll());
        if y != self.scroll_y {
            self.scroll_y = y;
            self.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests;
