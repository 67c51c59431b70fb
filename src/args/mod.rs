//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::ReplayArgs;
pub use types::{ReplayTuning, TimeBound};

pub(crate) use defaults::{DEFAULT_CONFIG_FILES, default_chart_path, default_snapshot_dir};
