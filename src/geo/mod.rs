//! Chart geometry: the fitted bounding box, the pan/zoom viewport and the
//! projection from geographic to screen coordinates.
//!
//! Coordinates use a local equirectangular approximation: longitude maps to
//! `x`, latitude to `y`, and the course `ratio` stands in for the cosine
//! correction between the two axes.
mod bounds;
mod projector;
mod viewport;


pub use bounds::BoundingBox;
pub use projector::GeoProjector;
pub use viewport::{Viewport, ZOOM_EXTENT};

pub(crate) use projector::linear_scale;
