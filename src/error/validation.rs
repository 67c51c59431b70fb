use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Invalid number '{value}': {source}")]
    InvalidFloat {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Value must be a finite number > 0, got '{value}'.")]
    NotPositive { value: String },
    #[error("Speed factor must be a finite number > 1, got '{value}'.")]
    SpeedFactorTooSmall { value: String },
    #[error("Invalid boolean '{value}'. Use true/false, yes/no, on/off or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Invalid time bound '{value}'. Use min, max, or an offset like 90s or 15m.")]
    InvalidBound { value: String },
    #[error("Replay start must not be after replay end.")]
    StartAfterEnd,
    #[error("Missing race file (set --race or provide `race` in config).")]
    MissingRacePath,
    #[error("Missing roster file (set --boats or provide `boats` in config).")]
    MissingBoatsPath,
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
