use std::time::{Duration, Instant};

/// Splash overlay that hides itself after a fixed delay.
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    hide_at: Instant,
    hidden: bool,
}

impl LoadingScreen {
    pub fn new(shown_at: Instant, delay: Duration) -> Self {
        Self {
            hide_at: shown_at + delay,
            hidden: false,
        }
    }

    /// Returns `true` exactly once, on the call that hides the screen.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.hidden && now >= self.hide_at {
            self.hidden = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn deadline(&self) -> Option<Instant> {
        (!self.hidden).then_some(self.hide_at)
    }
}
