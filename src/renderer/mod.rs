//! WebGPU rendering module
//!
//! The scene is a flat list of colored rectangles, rebuilt every frame from
//! the world and drawn as one triangle list.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
