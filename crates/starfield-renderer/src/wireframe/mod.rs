//! Wireframe rendering for floating solids: one line-list mesh per kind,
//! instanced per solid.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::*;
