//! Point cloud rendering: camera-facing quads sized in pixels, one instance
//! per point.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::*;
