//! Drawable scene for one instant of the replay and the seam to renderers.
mod build;
mod types;


pub use build::build_scene;
pub use types::{BoatTrace, Scene, SceneMark, ScenePoint};

use crate::error::AppResult;

/// Consumes a fully built scene. Each call replaces whatever the previous
/// call produced.
pub trait RenderBinder {
    /// # Errors
    ///
    /// Returns an error when the scene cannot be drawn or written.
    fn bind(&mut self, scene: &Scene) -> AppResult<()>;
}
