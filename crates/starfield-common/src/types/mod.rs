mod color;
mod vec3;

pub use color::*;
pub use vec3::*;
