//! The backdrop window: winit event handling, per-frame scene updates and
//! frame pacing. Everything past window creation lives in `Session`.

mod core;
mod event_handler;
mod init;
mod input;
mod polling;
mod render;
mod title;

pub use core::StarfieldApp;
