//! Rendering support
//!
//! Backend-agnostic: produces a scene snapshot and triangle-list vertices.
//! Whatever draws them lives outside this crate.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{ObstacleView, Scene, tessellate};
pub use vertex::Vertex;
