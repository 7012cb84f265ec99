//! StarfieldApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use starfield_config::StarfieldConfig;
use starfield_renderer::{FrameTimer, RenderState};
use starfield_scene::page::Debounce;
use starfield_scene::preset::MotionPreset;
use starfield_scene::{DeviceProfile, PageState, SceneAnimator};

/// Everything built once the window exists.
pub(super) struct Session {
    pub(super) profile: DeviceProfile,
    pub(super) scene: SceneAnimator,
    pub(super) page: PageState,
    pub(super) motion: MotionPreset,
    /// Latest touch position (logical px), released after the touch debounce.
    pub(super) touch: Debounce<(f32, f32)>,
}

/// Top-level application state.
pub struct StarfieldApp {
    pub(super) config: StarfieldConfig,
    pub(super) seed: Option<u64>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    pub(super) session: Option<Session>,

    // Frame pacing
    pub(super) frame_timer: FrameTimer,
    pub(super) next_frame: Instant,

    pub(super) should_exit: bool,
}

impl StarfieldApp {
    pub fn new(config: StarfieldConfig, seed: Option<u64>) -> Self {
        let now = Instant::now();
        Self {
            config,
            seed,
            window: None,
            render_state: None,
            session: None,
            frame_timer: FrameTimer::starting_at(now),
            next_frame: now,
            should_exit: false,
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    /// Window scale factor, 1.0 before the window exists.
    pub(super) fn scale_factor(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |w| w.scale_factor())
    }
}
