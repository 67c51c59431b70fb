use std::path::PathBuf;

/// Config files picked up from the working directory when `--config` is not
/// given, in lookup order.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["wakeline.toml", "wakeline.json"];

const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";

pub(crate) fn default_snapshot_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT_DIR)
}

const DEFAULT_CHART_FILE: &str = "wakeline-chart.png";

/// Chart written by the interactive `p` key when `--chart-out` is not set.
pub(crate) fn default_chart_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHART_FILE)
}
