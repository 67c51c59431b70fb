use std::time::Duration;

use wakeline::error::{AppError, AppResult, ValidationError};

use super::types::TimeBound;

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration(s).map_err(AppError::validation)
}

/// Parses `<digits>[ms|s|m|h]`; a bare number is seconds.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => Duration::from_secs(
            number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?,
        ),
        "h" => Duration::from_secs(
            number
                .checked_mul(60)
                .and_then(|minutes| minutes.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?,
        ),
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.as_millis() == 0 {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}

pub(crate) fn parse_positive_f64(s: &str) -> AppResult<f64> {
    let value = parse_f64(s)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::validation(ValidationError::NotPositive {
            value: s.to_owned(),
        }));
    }
    Ok(value)
}

pub(crate) fn parse_speed_factor(s: &str) -> AppResult<f64> {
    let value = parse_f64(s)?;
    if !value.is_finite() || value <= 1.0 {
        return Err(AppError::validation(ValidationError::SpeedFactorTooSmall {
            value: s.to_owned(),
        }));
    }
    Ok(value)
}

fn parse_f64(s: &str) -> AppResult<f64> {
    s.trim().parse::<f64>().map_err(|err| {
        AppError::validation(ValidationError::InvalidFloat {
            value: s.to_owned(),
            source: err,
        })
    })
}

pub(crate) fn parse_time_bound(s: &str) -> AppResult<TimeBound> {
    s.parse::<TimeBound>().map_err(AppError::validation)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" | "" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}
