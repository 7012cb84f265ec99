//! Per-frame update: page state, scene tick and draw.

use std::time::{Duration, Instant};

use starfield_renderer::perf::delta_factor;
use starfield_scene::page::PageUpdate;
use starfield_scene::preset::MotionPreset;

use super::core::{Session, StarfieldApp};

/// Rate the per-tick increments are tuned for.
const TICK_RATE: u32 = 60;

/// Tick multiplier for a frame that took `dt`.
pub(super) fn frame_delta_factor(motion: &MotionPreset, dt: Duration) -> f32 {
    let ticks = if motion.frame_rate_independent {
        delta_factor(dt, TICK_RATE)
    } else {
        1.0
    };
    motion.animation_speed * ticks
}

fn apply_page_update(session: &mut Session, update: &PageUpdate) {
    if let Some(y) = update.scrolled_to {
        session.scene.on_scroll(y);
    }
    for reveal in &update.revealed {
        tracing::debug!(
            group = %reveal.group,
            index = reveal.index,
            delay_ms = reveal.delay.as_millis() as u64,
            "Revealed"
        );
    }
    if let Some(hero) = update.hero {
        tracing::trace!(
            translate_y = hero.translate_y,
            opacity = hero.opacity,
            "Hero parallax"
        );
    }
    if update.loading_finished {
        tracing::info!("Loading screen hidden");
    }
}

impl StarfieldApp {
    pub(super) fn render_frame(&mut self) {
        let now = Instant::now();
        let dt = self.frame_timer.begin_frame_at(now);

        let (Some(session), Some(rs)) = (self.session.as_mut(), self.render_state.as_mut())
        else {
            return;
        };

        let update = session.page.update(now);
        if !update.is_empty() {
            apply_page_update(session, &update);
        }

        let factor = frame_delta_factor(&session.motion, dt);
        if let Err(e) = session.scene.frame(factor, rs) {
            tracing::error!("Render error: {e}");
        }

        let interval = Duration::from_secs(self.config.logging.fps_report_secs as u64);
        if self.frame_timer.should_report(now, interval) {
            tracing::debug!(
                profile = session.profile.label(),
                fps = %format!("{:.1}", self.frame_timer.fps()),
                frame_ms = %format!("{:.2}", self.frame_timer.frame_time_ms()),
                "Frame stats"
            );
        }

        if update.nav_changed || update.loading_finished {
            self.update_window_title();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(speed: f32, independent: bool) -> MotionPreset {
        MotionPreset {
            animation_speed: speed,
            frame_rate: 60,
            frame_rate_independent: independent,
        }
    }

    #[test]
    fn fixed_step_ignores_elapsed_time() {
        let m = motion(0.5, false);
        assert_eq!(frame_delta_factor(&m, Duration::from_millis(100)), 0.5);
        assert_eq!(frame_delta_factor(&m, Duration::ZERO), 0.5);
    }

    #[test]
    fn independent_step_scales_with_elapsed_time() {
        let m = motion(1.0, true);
        let one_tick = Duration::from_secs_f32(1.0 / 60.0);
        assert!((frame_delta_factor(&m, one_tick) - 1.0).abs() < 1e-4);
        assert!((frame_delta_factor(&m, one_tick * 2) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn independent_step_is_capped() {
        let m = motion(0.5, true);
        assert!((frame_delta_factor(&m, Duration::from_secs(2)) - 2.0).abs() < 1e-6);
    }
}
