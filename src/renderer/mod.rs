//! Rendering module
//!
//! The scene paints into a `Surface`; the WebGPU pipeline consumes a recorded
//! `DrawList` and turns it into colored triangles.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState};
pub use scene::{draw, paint};
pub use surface::{Color, DrawCommand, DrawList, Surface};
pub use vertex::Vertex;
