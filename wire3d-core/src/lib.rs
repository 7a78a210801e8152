/// Wire3D Core Library - Software wireframe rendering pipeline
///
/// This library provides the stateless core of the renderer: geometry
/// data types, world/view/projection transform construction, and the
/// render device that projects meshes and rasterizes their edges into
/// an RGBA pixel buffer.

pub mod color;
pub mod device;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use device::{Device, LineStrategy};
pub use geometry::{Face, Mesh};
pub use projection::{Camera, Projection};
pub use transform::Transform;
