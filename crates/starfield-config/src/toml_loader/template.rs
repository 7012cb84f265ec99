//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Starfield Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Tiered values take both tiers: { full = ..., reduced = ... }

[device]
# profile = "auto"              # auto, full, constrained
# constrained_max_width = 768   # viewports narrower than this are constrained
# min_parallelism = 4           # fewer hardware threads = low performance

[stars]
# count = { full = 2000, reduced = 800 }
# size = { full = 1.5, reduced = 1.2 }
# span = 2000.0
# depth = 1500.0
# z_offset = -500.0
# color = "#ffffff"
# opacity = 0.8                 # 0.0-1.0
# additive = true
# spin = [0.0001, 0.0002, 0.0]  # radians per tick

[particles]
# count = { full = 500, reduced = 150 }
# size = { full = 2.0, reduced = 1.5 }
# span = 1500.0
# depth = 1000.0
# z_offset = -300.0
# color = "#00f0ff"
# opacity = 0.4
# spin = [0.0, 0.0005, 0.0003]

[glyphs]
# enabled = true
# show_on_constrained = false
# count = { full = 15, reduced = 8 }   # reduced on low-performance devices
# spread = [1200.0, 1200.0, 800.0]
# z_offset = -400.0
# max_angular_speed = 0.002
# max_drift_speed = 0.1
# boundary = 600.0
# color = "#00f0ff"
# opacity = 0.15

[shapes]
# enabled = true
# count = { full = 8, reduced = 4 }
# spread = [1000.0, 1000.0, 600.0]
# z_offset = -300.0
# max_angular_speed = 0.003
# color = "#0066ff"
# opacity = 0.1

[camera]
# fov_degrees = 75.0            # 10-170
# near = 0.1
# far = 2000.0
# base_z = 500.0
# easing = { full = 0.02, reduced = 0.01 }
# pointer_influence = { full = 0.05, reduced = 0.02 }
# touch_influence = 0.02
# scroll_rate = 0.1

[motion]
# animation_speed = { full = 1.0, reduced = 0.5 }
# frame_rate = 60               # 30-240, or 0 for unpaced
# frame_rate_independent = true

[render]
# background = "#0a0a0f"
# fog_color = "#0a0a0f"
# fog_density = 0.00015
# max_pixel_ratio = { full = 2.0, reduced = 1.5 }
# antialias = { full = true, reduced = false }

[page]
# home_section = "home"
# nav_offset = 200.0
# reveal_threshold = { full = 0.2, reduced = 0.1 }
# reveal_margin = { full = 100.0, reduced = 50.0 }
# parallax = { full = true, reduced = false }
# hero_parallax_rate = 0.3
# hero_fade_distance = 600.0
# nav_debounce_ms = { full = 0, reduced = 100 }
# touch_debounce_ms = 50
# loading_delay_ms = { full = 1500, reduced = 1000 }
# smooth_scroll_ms = 600
# wheel_line_px = 100.0
# hover_group = "project-card"
#
# [[page.sections]]
# id = "home"
# top = 0.0
# height = 900.0

[logging]
# level = "info"
# welcome_banner = true
# fps_report_secs = 5
"##
    .to_string()
}
