use tracing::trace;

use crate::geo::{Viewport, linear_scale};
use crate::race::Position;

use super::runs::RunBuilder;

/// Zoom scale at which the stride is largest.
pub const ZOOM_OUT: f64 = 0.1;
/// Zoom scale at which every sample is drawn.
pub const ZOOM_IN: f64 = 30.0;
pub const MAX_STRIDE: usize = 10;
const MIN_STRIDE: usize = 1;
/// Decimated samples needed before the last two are re-walked exactly.
const MIN_DECIMATED: usize = 3;
/// Strides re-walked without decimation at the end of the history.
const EXACT_TAIL_STRIDES: usize = 2;

/// Output of one sampling pass.
///
/// `runs` are non-empty, time ordered and never hold a sample later than the
/// requested time. `marker` is the latest sample at or before that time, even
/// when it is outside the viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplingResult {
    pub runs: Vec<Vec<Position>>,
    pub marker: Option<Position>,
}

impl SamplingResult {
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.runs.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.runs.is_empty() && self.marker.is_none()
    }
}

/// Holds only the zoom-to-stride mapping; every call recomputes its result
/// from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSampler {
    zoom_range: [f64; 2],
    max_stride: usize,
}

impl Default for TrackSampler {
    fn default() -> Self {
        Self {
            zoom_range: [ZOOM_OUT, ZOOM_IN],
            max_stride: MAX_STRIDE,
        }
    }
}

impl TrackSampler {
    /// Stride falls linearly from `max_stride` at `zoom_range[0]` to 1 at
    /// `zoom_range[1]`.
    #[must_use]
    pub fn new(zoom_range: [f64; 2], max_stride: usize) -> Self {
        Self {
            zoom_range,
            max_stride: max_stride.max(MIN_STRIDE),
        }
    }

    /// Decimation stride for a zoom scale: 10 at zoom 0.1 down to 1 at zoom
    /// 30 by default, linear in between. Non-increasing in `zoom_scale`.
    #[must_use]
    pub fn stride(&self, zoom_scale: f64) -> usize {
        if zoom_scale.is_nan() {
            return self.max_stride;
        }
        let max_stride = self.max_stride as f64;
        let stride = linear_scale(zoom_scale, self.zoom_range, [max_stride, MIN_STRIDE as f64])
            .clamp(MIN_STRIDE as f64, max_stride)
            .round();
        (stride as usize).clamp(MIN_STRIDE, self.max_stride)
    }

    /// Samples one time-ordered track for drawing at `current_time`.
    ///
    /// Samples later than `current_time` are ignored. The remaining history is
    /// walked with the zoom stride except for the last two strides, which are
    /// walked sample by sample. When fewer than three strided samples exist the
    /// whole history is walked exactly.
    #[must_use]
    pub fn sample(
        &self,
        positions: &[Position],
        current_time: f64,
        viewport: &Viewport,
        zoom_scale: f64,
    ) -> SamplingResult {
        let end = positions.partition_point(|position| position.time <= current_time);
        let Some(history) = positions.get(..end) else {
            return SamplingResult::default();
        };
        let Some(marker) = history.last().copied() else {
            return SamplingResult::default();
        };

        let stride = self.stride(zoom_scale);
        let strided = history.len().div_ceil(stride);
        let exact_from = if strided < MIN_DECIMATED {
            0
        } else {
            strided
                .saturating_sub(EXACT_TAIL_STRIDES)
                .saturating_mul(stride)
        };
        let (decimated, exact) = history.split_at(exact_from.min(history.len()));

        let mut builder = RunBuilder::new(viewport);
        decimated
            .iter()
            .step_by(stride)
            .chain(exact)
            .for_each(|position| builder.push(*position));
        let runs = builder.finish();

        trace!(
            samples = history.len(),
            stride,
            exact = exact.len(),
            runs = runs.len(),
            "Sampled track."
        );

        SamplingResult {
            runs,
            marker: Some(marker),
        }
    }
}
