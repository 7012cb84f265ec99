mod camera;
mod frame;
mod helpers;
mod state;

pub use camera::*;
pub use state::*;
