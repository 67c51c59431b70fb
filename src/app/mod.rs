//! Replay runners: the interactive terminal session and the headless export.
mod replay;

pub(crate) use replay::run_replay;
