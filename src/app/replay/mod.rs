mod bounds;
mod chart;
mod headless;
mod keys;
mod runner;
mod setup;
mod snapshots;
mod summary;

#[cfg(test)]
mod tests;

pub(crate) use runner::run_replay;
