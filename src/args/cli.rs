use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_f64, parse_speed_factor, parse_time_bound,
};
use super::types::{ReplayTuning, TimeBound};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Replay a sailing race in the terminal: boat tracks on a fitted chart with pan/zoom, section/class filters and PNG/JSON exports."
)]
pub struct ReplayArgs {
    /// Race document with course marks and boat tracks (racedata.xml)
    #[arg(long)]
    pub race: Option<PathBuf>,

    /// Boat roster with names, colors, sections and classes (boats.xml)
    #[arg(long)]
    pub boats: Option<PathBuf>,

    /// Path to config file (TOML/JSON). Defaults to ./wakeline.toml or ./wakeline.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Wall-clock interval between replay ticks (supports ms/s/m/h)
    #[arg(long, default_value = "100ms", value_parser = parse_duration_arg)]
    pub tick: Duration,

    /// Wall-clock time needed to play the whole window at normal speed
    #[arg(long = "replay-duration", default_value = "60s", value_parser = parse_duration_arg)]
    pub replay_duration: Duration,

    /// Step multiplier applied by the speed keys
    #[arg(long = "speed-factor", default_value = "1.1", value_parser = parse_speed_factor)]
    pub speed_factor: f64,

    /// Replay window start (min, max, or an offset from the first sample like 90s, 15m)
    #[arg(long, value_parser = parse_time_bound)]
    pub start: Option<TimeBound>,

    /// Replay window end (min, max, or an offset from the first sample)
    #[arg(long, value_parser = parse_time_bound)]
    pub end: Option<TimeBound>,

    /// Initial zoom scale (clamped to 0.1..100)
    #[arg(long, default_value = "1", value_parser = parse_positive_f64)]
    pub zoom: f64,

    /// Chart width in pixels
    #[arg(long, default_value = "540", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value = "550", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Hide a section when the replay starts (repeatable)
    #[arg(long = "hide-section")]
    pub hide_sections: Vec<String>,

    /// Hide a boat class when the replay starts (repeatable)
    #[arg(long = "hide-class")]
    pub hide_classes: Vec<String>,

    /// Disable the terminal UI and print a per-boat summary instead
    #[arg(long = "no-ui", alias = "no-tui")]
    pub no_ui: bool,

    /// Race time of the headless summary and chart (default: max)
    #[arg(long, value_parser = parse_time_bound)]
    pub at: Option<TimeBound>,

    /// Write a JSON scene snapshot every interval of race time (supports ms/s/m/h)
    #[arg(long = "snapshot-interval", value_parser = parse_duration_arg)]
    pub snapshot_interval: Option<Duration>,

    /// Snapshot output directory (defaults to ./snapshots)
    #[arg(long = "snapshot-out")]
    pub snapshot_out: Option<PathBuf>,

    /// Write a PNG chart of the summary scene (headless) or on `p` (interactive)
    #[arg(long = "chart-out")]
    pub chart_out: Option<PathBuf>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by WAKELINE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[arg(skip)]
    pub tuning: ReplayTuning,
}
