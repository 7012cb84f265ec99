//! Touch debounce servicing and frame pacing.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::StarfieldApp;

/// Time between frames at `frame_rate`; `None` means unpaced.
pub(super) fn frame_interval(frame_rate: u32) -> Option<Duration> {
    (frame_rate > 0).then(|| Duration::from_secs_f64(1.0 / frame_rate as f64))
}

/// Earliest of the next frame slot and any pending timer.
pub(super) fn next_wake(next_frame: Instant, timers: &[Option<Instant>]) -> Instant {
    timers.iter().flatten().fold(next_frame, |wake, &t| wake.min(t))
}

impl StarfieldApp {
    /// Release debounced input and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        let Some(ref mut session) = self.session else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };

        if let Some((x, y)) = session.touch.poll(now) {
            session.scene.on_touch_move(x, y);
        }
        let timers = [session.touch.deadline(), session.page.next_deadline()];
        // Page timers are serviced by the next frame's update
        let page_due = session.page.next_deadline().is_some_and(|t| t <= now);

        let Some(interval) = frame_interval(session.motion.frame_rate) else {
            self.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
            return;
        };

        if now >= self.next_frame || page_due {
            self.request_redraw();
            // Skip missed slots instead of bursting to catch up.
            self.next_frame = (self.next_frame + interval).max(now);
        }

        let wake = next_wake(self.next_frame, &timers);
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}
