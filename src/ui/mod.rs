//! Terminal dashboard: chart canvas, replay status, filters and key help.
pub(crate) mod binder;
pub(crate) mod model;
pub(crate) mod render;
