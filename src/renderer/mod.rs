//! Rendering module
//!
//! `shapes` holds layout and colors, `scene` issues the macroquad draw calls.

pub mod scene;
pub mod shapes;

pub use scene::SceneRenderer;
