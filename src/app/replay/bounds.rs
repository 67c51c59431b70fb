use wakeline::error::{AppError, AppResult, ValidationError};
use wakeline::race::TimeRange;

use crate::args::TimeBound;

/// Resolves the replay window inside the race's time range. Missing bounds
/// default to the race's first and last samples.
pub(super) fn resolve_window(
    range: TimeRange,
    start: Option<TimeBound>,
    end: Option<TimeBound>,
) -> AppResult<TimeRange> {
    let min = start.unwrap_or(TimeBound::Min).resolve(range);
    let max = end.unwrap_or(TimeBound::Max).resolve(range);
    if min > max {
        return Err(AppError::validation(ValidationError::StartAfterEnd));
    }
    Ok(TimeRange { min, max })
}

/// Race time for `--at`, clamped into the replay window.
pub(super) fn resolve_at(range: TimeRange, window: TimeRange, at: Option<TimeBound>) -> f64 {
    at.unwrap_or(TimeBound::Max)
        .resolve(range)
        .clamp(window.min, window.max)
}
