//! Frame timing: rolling-window FPS and per-frame delta.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Tracks frame durations for FPS calculation.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
    last_report: Instant,
}

impl FrameTimer {
    /// 120-sample rolling window.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: now,
            max_samples: 120,
            last_report: now,
        }
    }

    /// Record a frame boundary and return the time since the previous one.
    pub fn begin_frame(&mut self) -> Duration {
        self.begin_frame_at(Instant::now())
    }

    pub fn begin_frame_at(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        dt
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.total_secs() / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// True once per `interval`; used for periodic FPS logs. A zero interval
    /// never reports.
    pub fn should_report(&mut self, now: Instant, interval: Duration) -> bool {
        if interval.is_zero() || now.saturating_duration_since(self.last_report) < interval {
            return false;
        }
        self.last_report = now;
        true
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a frame interval into a tick multiplier relative to
/// `frame_rate` fps, capped at 4 so a stall doesn't fling objects.
pub fn delta_factor(dt: Duration, frame_rate: u32) -> f32 {
    (dt.as_secs_f32() * frame_rate as f32).clamp(0.0, 4.0)
}
