use std::path::PathBuf;
use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use wakeline::error::{AppError, AppResult, ConfigError};

use crate::args::{ReplayArgs, TimeBound};

use super::types::{ConfigFile, DurationValue, TuningConfig};

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line win over the config file.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut ReplayArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "race")
        && let Some(path) = config.race.as_deref()
    {
        args.race = Some(PathBuf::from(path));
    }

    if !is_cli(matches, "boats")
        && let Some(path) = config.boats.as_deref()
    {
        args.boats = Some(PathBuf::from(path));
    }

    if !is_cli(matches, "tick")
        && let Some(tick) = config.tick.as_ref()
    {
        args.tick = to_duration(tick, "tick")?;
    }

    if !is_cli(matches, "replay_duration")
        && let Some(duration) = config.replay_duration.as_ref()
    {
        args.replay_duration = to_duration(duration, "replay_duration")?;
    }

    if !is_cli(matches, "speed_factor")
        && let Some(factor) = config.speed_factor
    {
        args.speed_factor = ensure_above_one(factor, "speed_factor")?;
    }

    if !is_cli(matches, "start")
        && let Some(start) = config.start.as_deref()
    {
        args.start = Some(parse_bound(start)?);
    }

    if !is_cli(matches, "end")
        && let Some(end) = config.end.as_deref()
    {
        args.end = Some(parse_bound(end)?);
    }

    if !is_cli(matches, "at")
        && let Some(at) = config.at.as_deref()
    {
        args.at = Some(parse_bound(at)?);
    }

    if !is_cli(matches, "zoom")
        && let Some(zoom) = config.zoom
    {
        args.zoom = ensure_positive(zoom, "zoom")?;
    }

    if !is_cli(matches, "width")
        && let Some(width) = config.width
    {
        args.width = ensure_dimension(width, "width")?;
    }

    if !is_cli(matches, "height")
        && let Some(height) = config.height
    {
        args.height = ensure_dimension(height, "height")?;
    }

    if !is_cli(matches, "hide_sections")
        && let Some(sections) = config.hide_sections.as_ref()
    {
        args.hide_sections.clone_from(sections);
    }

    if !is_cli(matches, "hide_classes")
        && let Some(classes) = config.hide_classes.as_ref()
    {
        args.hide_classes.clone_from(classes);
    }

    if !is_cli(matches, "no_ui")
        && let Some(no_ui) = config.no_ui
    {
        args.no_ui = no_ui;
    }

    if !is_cli(matches, "snapshot_interval")
        && let Some(interval) = config.snapshot_interval.as_ref()
    {
        args.snapshot_interval = Some(to_duration(interval, "snapshot_interval")?);
    }

    if !is_cli(matches, "snapshot_out")
        && let Some(path) = config.snapshot_out.as_deref()
    {
        args.snapshot_out = Some(PathBuf::from(path));
    }

    if !is_cli(matches, "chart_out")
        && let Some(path) = config.chart_out.as_deref()
    {
        args.chart_out = Some(PathBuf::from(path));
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if let Some(tuning) = config.tuning.as_ref() {
        apply_tuning(args, tuning)?;
    }

    Ok(())
}

fn apply_tuning(args: &mut ReplayArgs, tuning: &TuningConfig) -> AppResult<()> {
    if let Some(ratio) = tuning.aspect_ratio {
        args.tuning.aspect_ratio = Some(ensure_positive(ratio, "tuning.aspect_ratio")?);
    }
    if let Some(ratio) = tuning.max_speed_ratio {
        args.tuning.max_speed_ratio = ensure_above_one(ratio, "tuning.max_speed_ratio")?;
    }
    if let Some(fraction) = tuning.seek_fraction {
        args.tuning.seek_fraction = ensure_positive(fraction, "tuning.seek_fraction")?;
    }
    if let Some(fraction) = tuning.pan_fraction {
        args.tuning.pan_fraction = ensure_positive(fraction, "tuning.pan_fraction")?;
    }
    if let Some(step) = tuning.zoom_step {
        args.tuning.zoom_step = ensure_above_one(step, "tuning.zoom_step")?;
    }
    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}

fn parse_bound(value: &str) -> AppResult<TimeBound> {
    value.parse::<TimeBound>().map_err(AppError::validation)
}

fn ensure_positive(value: f64, field: &'static str) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::config(ConfigError::FieldMustBePositive {
            field,
            value,
        }));
    }
    Ok(value)
}

fn ensure_above_one(value: f64, field: &'static str) -> AppResult<f64> {
    if !value.is_finite() || value <= 1.0 {
        return Err(AppError::config(ConfigError::FieldMustExceedOne {
            field,
            value,
        }));
    }
    Ok(value)
}

fn ensure_dimension(value: u32, field: &'static str) -> AppResult<u32> {
    if value == 0 {
        return Err(AppError::config(ConfigError::DimensionMustBePositive {
            field,
        }));
    }
    Ok(value)
}
