mod app;
mod config;
mod dataset;
mod export;
mod geo;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dataset::DatasetError;
pub use export::ExportError;
pub use geo::{Axis, GeoError};
pub use validation::ValidationError;
