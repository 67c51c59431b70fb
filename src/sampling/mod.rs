//! Per-tick track sampling: stride decimation, viewport culling and an exact
//! tail so the boat marker follows the time cursor sample by sample.
mod runs;
mod sampler;

#[cfg(test)]
mod tests;

pub use sampler::{MAX_STRIDE, SamplingResult, TrackSampler, ZOOM_IN, ZOOM_OUT};
