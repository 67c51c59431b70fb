use std::time::Duration;

use serde::Deserialize;

use wakeline::error::ValidationError;

use crate::args::parsers::parse_duration;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub race: Option<String>,
    pub boats: Option<String>,
    pub tick: Option<DurationValue>,
    pub replay_duration: Option<DurationValue>,
    pub speed_factor: Option<f64>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub at: Option<String>,
    pub zoom: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(alias = "hidden_sections")]
    pub hide_sections: Option<Vec<String>>,
    #[serde(alias = "hidden_classes")]
    pub hide_classes: Option<Vec<String>>,
    #[serde(alias = "no_tui")]
    pub no_ui: Option<bool>,
    pub snapshot_interval: Option<DurationValue>,
    pub snapshot_out: Option<String>,
    pub chart_out: Option<String>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
    pub tuning: Option<TuningConfig>,
}

/// The `[tuning]` table. These knobs have no CLI flag.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuningConfig {
    pub aspect_ratio: Option<f64>,
    pub max_speed_ratio: Option<f64>,
    pub seek_fraction: Option<f64>,
    pub pan_fraction: Option<f64>,
    pub zoom_step: Option<f64>,
}

/// A duration written either as whole seconds or as a unit string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
