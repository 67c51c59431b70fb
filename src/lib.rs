//! Core library for the `wakeline` race replay.
//!
//! A [`race::Race`] is loaded once from the roster and race XML documents. A
//! [`replay::ReplaySession`] then owns the mutable replay state (clock,
//! viewport, selection) and derives a [`scene::Scene`] on demand: every active
//! boat's track is decimated and culled by [`sampling::TrackSampler`] and
//! projected to screen space by [`geo::GeoProjector`]. Renderers implement
//! [`scene::RenderBinder`].
pub mod error;
pub mod geo;
pub mod race;
pub mod replay;
pub mod sampling;
pub mod scene;
pub mod selection;
