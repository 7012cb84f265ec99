//! Device capability classification.

use starfield_config::schema::{DeviceConfig, ProfileOverride};

/// Raw facts about the host, gathered once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceHints {
    /// Logical viewport width in px.
    pub viewport_width: f32,
    /// Hardware threads reported by the host, when known.
    pub hardware_concurrency: Option<usize>,
    /// The primary input is touch (phone/tablet, no hover).
    pub touch_first: bool,
}

impl DeviceHints {
    /// Hints for the current process given the window's logical width.
    pub fn current(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            hardware_concurrency: std::thread::available_parallelism()
                .ok()
                .map(|n| n.get()),
            touch_first: cfg!(any(target_os = "android", target_os = "ios")),
        }
    }
}

/// Coarse capability classification selecting preset values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    /// Small screen or mobile platform.
    pub constrained: bool,
    /// Few hardware threads.
    pub low_concurrency: bool,
    /// Touch-first host; hover affordances are off.
    pub touch_input: bool,
}

impl DeviceProfile {
    pub const FULL: Self = Self {
        constrained: false,
        low_concurrency: false,
        touch_input: false,
    };

    pub const CONSTRAINED: Self = Self {
        constrained: true,
        low_concurrency: false,
        touch_input: true,
    };

    /// Classify the host. A forced profile in `config` wins over detection.
    pub fn detect(config: &DeviceConfig, hints: &DeviceHints) -> Self {
        match config.profile {
            ProfileOverride::Full => Self {
                touch_input: hints.touch_first,
                ..Self::FULL
            },
            ProfileOverride::Constrained => Self {
                touch_input: hints.touch_first,
                ..Self::CONSTRAINED
            },
            ProfileOverride::Auto => Self {
                constrained: hints.touch_first
                    || hints.viewport_width < config.constrained_max_width as f32,
                low_concurrency: hints
                    .hardware_concurrency
                    .is_some_and(|n| n < config.min_parallelism as usize),
                touch_input: hints.touch_first,
            },
        }
    }

    /// Either constrained or short on threads.
    pub fn low_performance(&self) -> bool {
        self.constrained || self.low_concurrency
    }

    pub fn label(&self) -> &'static str {
        match (self.constrained, self.low_concurrency) {
            (true, _) => "constrained",
            (false, true) => "low-concurrency",
            (false, false) => "full",
        }
    }
}
