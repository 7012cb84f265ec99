use std::time::{Duration, Instant};

/// Cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-flight animated scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`, and whether the animation has finished.
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let elapsed = now.saturating_duration_since(self.start);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * ease_in_out(t), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn starts_at_origin_and_lands_on_target() {
        let t0 = Instant::now();
        let s = SmoothScroll::new(1800.0, 0.0, t0, Duration::from_millis(600));
        assert_eq!(s.sample(t0), (1800.0, false));
        let (mid, done) = s.sample(t0 + Duration::from_millis(300));
        assert!(!done);
        assert!((mid - 900.0).abs() < 1e-2);
        assert_eq!(s.sample(t0 + Duration::from_millis(600)), (0.0, true));
        assert_eq!(s.sample(t0 + Duration::from_secs(5)), (0.0, true));
    }

    #[test]
    fn zero_duration_jumps() {
        let t0 = Instant::now();
        let s = SmoothScroll::new(0.0, 3000.0, t0, Duration::ZERO);
        assert_eq!(s.sample(t0), (3000.0, true));
    }
}
