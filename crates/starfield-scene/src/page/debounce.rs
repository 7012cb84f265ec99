use std::time::{Duration, Instant};

/// Trailing-edge debounce: a pushed value is released once `delay` has
/// passed without another push.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value and restart the timer.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if its timer has run out.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.delay => {
                self.pending.take().map(|(v, _)| v)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn zero_delay_fires_immediately() {
        let now = Instant::now();
        let mut d = Debounce::new(Duration::ZERO);
        d.push(1, now);
        assert_eq!(d.poll(now), Some(1));
        assert_eq!(d.poll(now), None);
    }

    #[test]
    fn waits_for_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debounce::new(100 * MS);
        d.push("a", t0);
        assert_eq!(d.poll(t0 + 99 * MS), None);
        assert_eq!(d.poll(t0 + 100 * MS), Some("a"));
        assert!(!d.is_pending());
    }

    #[test]
    fn push_restarts_timer_and_keeps_latest() {
        let t0 = Instant::now();
        let mut d = Debounce::new(50 * MS);
        d.push((1.0, 2.0), t0);
        d.push((3.0, 4.0), t0 + 40 * MS);
        assert_eq!(d.poll(t0 + 60 * MS), None);
        assert_eq!(d.deadline(), Some(t0 + 90 * MS));
        assert_eq!(d.poll(t0 + 90 * MS), Some((3.0, 4.0)));
    }
}
