use std::str::FromStr;
use std::time::Duration;

use wakeline::error::ValidationError;
use wakeline::race::TimeRange;

use super::parsers::parse_duration;

/// A point of the race timeline given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    Min,
    Max,
    /// Offset from the first sample of the race.
    Offset(Duration),
}

impl TimeBound {
    /// Race time for this bound, clamped to `range`.
    #[must_use]
    pub fn resolve(self, range: TimeRange) -> f64 {
        match self {
            TimeBound::Min => range.min,
            TimeBound::Max => range.max,
            TimeBound::Offset(offset) => {
                (range.min + offset.as_secs_f64()).clamp(range.min, range.max)
            }
        }
    }
}

impl FromStr for TimeBound {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("min") {
            return Ok(TimeBound::Min);
        }
        if trimmed.eq_ignore_ascii_case("max") {
            return Ok(TimeBound::Max);
        }
        parse_duration(trimmed)
            .map(TimeBound::Offset)
            .map_err(|_err| ValidationError::InvalidBound {
                value: value.to_owned(),
            })
    }
}

/// Replay knobs that are only settable from a config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayTuning {
    /// Overrides the course `ratio` attribute.
    pub aspect_ratio: Option<f64>,
    pub max_speed_ratio: f64,
    pub seek_fraction: f64,
    pub pan_fraction: f64,
    pub zoom_step: f64,
}

impl Default for ReplayTuning {
    fn default() -> Self {
        Self {
            aspect_ratio: None,
            max_speed_ratio: 10.0,
            seek_fraction: 0.02,
            pan_fraction: 0.1,
            zoom_step: 1.25,
        }
    }
}
