pub mod geometry;
pub mod gpu;
pub mod matrix;
pub mod perf;
pub mod points;
pub mod render_state;
pub mod wireframe;

pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use perf::FrameTimer;
pub use points::PointCloudRenderer;
pub use render_state::RenderState;
pub use wireframe::WireframeRenderer;
