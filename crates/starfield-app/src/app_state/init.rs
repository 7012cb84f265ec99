//! Window creation, device detection, scene and renderer setup.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use starfield_renderer::{FrameTimer, RenderState};
use starfield_scene::page::Debounce;
use starfield_scene::{DeviceHints, DeviceProfile, PageState, SceneAnimator, ScenePreset, Viewport};

use super::core::{Session, StarfieldApp};

// =============================================================================
// CONSTANTS
// =============================================================================

const WINDOW_TITLE: &str = "Starfield";

/// Initial inner size in logical px.
const INITIAL_SIZE: (f64, f64) = (1280.0, 800.0);

// =============================================================================
// INITIALIZATION
// =============================================================================

impl StarfieldApp {
    /// Create the window, resolve the preset and build the scene and GPU state.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(INITIAL_SIZE.0, INITIAL_SIZE.1));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let scale = window.scale_factor();
        let logical: LogicalSize<f32> = window.inner_size().to_logical(scale);

        let hints = DeviceHints::current(logical.width);
        let profile = DeviceProfile::detect(&self.config.device, &hints);
        let preset = ScenePreset::resolve(&self.config, profile);
        self.log_startup_banners(&preset);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = SceneAnimator::initialize(
            &preset,
            Viewport::new(logical.width, logical.height),
            &mut rng,
        );

        let render_state =
            match pollster::block_on(RenderState::new(window.clone(), &scene, preset.render)) {
                Ok(rs) => rs,
                Err(e) => {
                    tracing::error!("Failed to initialize renderer: {e}");
                    return false;
                }
            };

        let now = Instant::now();
        self.session = Some(Session {
            profile,
            page: PageState::new(&preset.page, logical.height, now),
            motion: preset.motion,
            touch: Debounce::new(preset.page.touch_debounce),
            scene,
        });
        self.render_state = Some(render_state);
        self.window = Some(window);
        self.frame_timer = FrameTimer::starting_at(now);
        self.next_frame = now;

        tracing::info!(width = logical.width, height = logical.height, "Window ready");
        true
    }

    fn log_startup_banners(&self, preset: &ScenePreset) {
        if self.config.logging.welcome_banner {
            tracing::info!("Welcome aboard. Enjoy the view.");
        }
        if preset.profile.low_performance() {
            tracing::info!(
                profile = preset.profile.label(),
                "Performance mode enabled for this device"
            );
        }
        tracing::info!(
            profile = preset.profile.label(),
            objects = preset.object_count(),
            "Scene preset resolved"
        );
    }
}
