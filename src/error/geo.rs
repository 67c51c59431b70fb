use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("No positions or marks to fit a chart around.")]
    Empty,
    #[error("Degenerate bounding box: {axis} extent is zero.")]
    Degenerate { axis: Axis },
    #[error("Aspect ratio must be a finite number > 0, got {value}.")]
    InvalidAspectRatio { value: f64 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
