//! Scene animation core.
//!
//! Owns the backdrop's point clouds and floating solids, mutates their
//! transforms once per frame, and hands the result to a [`SceneRenderer`].
//! The [`page`] module models the scroll-driven page affordances that sit on
//! top of the backdrop.

pub mod animator;
pub mod camera;
pub mod device;
pub mod page;
pub mod point_cloud;
pub mod preset;
pub mod solid;

pub use animator::{SceneAnimator, SceneRenderer, Viewport};
pub use camera::CameraRig;
pub use device::{DeviceHints, DeviceProfile};
pub use page::PageState;
pub use point_cloud::{PointCloud, PointStyle};
pub use preset::ScenePreset;
pub use solid::{Drift, FloatingSolid, SolidGroup};
