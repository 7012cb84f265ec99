//! Pointer, touch, wheel, keyboard and resize handling.

use std::time::Instant;

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, Touch, TouchPhase};
use winit::keyboard::{Key, NamedKey};

use starfield_scene::Viewport;

use super::core::StarfieldApp;

/// Section index for a digit shortcut: "1" is the first section.
pub(super) fn section_shortcut(text: &str) -> Option<usize> {
    match text.parse::<usize>() {
        Ok(n @ 1..=9) => Some(n - 1),
        _ => None,
    }
}

impl StarfieldApp {
    pub(super) fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Some(ref mut rs) = self.render_state {
            rs.resize(size.width, size.height);
        }

        let logical: LogicalSize<f32> = size.to_logical(self.scale_factor());
        if let Some(ref mut session) = self.session {
            session
                .scene
                .on_resize(Viewport::new(logical.width, logical.height));
            session.page.set_viewport_height(logical.height);
        }
        self.request_redraw();
    }

    pub(super) fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let pos: LogicalPosition<f32> = position.to_logical(self.scale_factor());
        let Some(ref mut session) = self.session else {
            return;
        };

        session.scene.on_pointer_move(pos.x, pos.y);
        if let Some(card) = session.page.hover_at(pos.y) {
            tracing::debug!(
                hovered = ?session.page.hovered(),
                lift = card.translate_y,
                scale = card.scale,
                "Card hover changed"
            );
        }
    }

    pub(super) fn handle_touch(&mut self, touch: Touch) {
        if touch.phase != TouchPhase::Moved {
            return;
        }
        let pos: LogicalPosition<f32> = touch.location.to_logical(self.scale_factor());
        if let Some(ref mut session) = self.session {
            session.touch.push((pos.x, pos.y), Instant::now());
        }
    }

    pub(super) fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        let scale = self.scale_factor();
        let Some(ref mut session) = self.session else {
            return;
        };

        // winit reports positive y when scrolling up; page offsets grow downward.
        match delta {
            MouseScrollDelta::LineDelta(_, y) => session.page.scroll_lines(-y),
            MouseScrollDelta::PixelDelta(p) => session.page.scroll_by(-(p.y / scale) as f32),
        }
    }

    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(ref mut session) = self.session else {
            return;
        };

        let now = Instant::now();
        let started = match event.logical_key.as_ref() {
            Key::Named(NamedKey::Home | NamedKey::Escape) => session.page.scroll_home(now),
            Key::Character(text) => match section_shortcut(text) {
                Some(n) => session.page.scroll_to_index(n, now),
                None => false,
            },
            _ => false,
        };

        if let Some(target) = session.page.scroll_target().filter(|_| started) {
            tracing::debug!(from = session.page.scroll_y(), to = target, "Smooth scroll started");
        }
    }
}
