//! Recursive sphere ray tracer.
//!
//! Quaternion-based camera and geometry, Lambert/Phong shading with hard
//! shadows, mirror reflections, and a frame loop that rasterises each frame
//! on a per-frame worker pool.

pub mod camera;
pub mod config;
pub mod error;
pub mod light;
pub mod material;
pub mod quat;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;

pub use camera::Camera;
pub use config::RenderSettings;
pub use error::RenderError;
pub use light::Light;
pub use material::{col, Colour, Material};
pub use quat::Quat;
pub use ray::Ray;
pub use render::{FrameBuffer, Renderer};
pub use scene::{Hit, Scene};
pub use sphere::Sphere;
