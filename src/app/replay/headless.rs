use tracing::info;

use wakeline::error::AppResult;
use wakeline::race::TimeRange;
use wakeline::replay::{ReplayAction, ReplaySession};
use wakeline::scene::RenderBinder;

use crate::args::{ReplayArgs, default_snapshot_dir};

use super::bounds::resolve_at;
use super::chart::ChartWriter;
use super::snapshots::{SnapshotIntervalState, SnapshotWriter};
use super::summary::summary_lines;

/// Runs the replay without a terminal UI: interval snapshots over the whole
/// window, then a summary (and optional chart) at `--at`.
pub(super) fn run_headless(session: &mut ReplaySession<'_>, args: &ReplayArgs) -> AppResult<()> {
    let race = session.race();
    let window = TimeRange {
        min: session.clock().min_time(),
        max: session.clock().max_time(),
    };

    if let Some(interval) = args.snapshot_interval {
        let dir = args.snapshot_out.clone().unwrap_or_else(default_snapshot_dir);
        let mut writer = SnapshotWriter::new(dir, race);
        let mut state = SnapshotIntervalState::new(interval, window)?;
        state.emit(session, &mut writer, window.max, true)?;
        info!(count = writer.written(), "Interval snapshots written.");
    }

    let at = resolve_at(race.time_range, window, args.at);
    session.apply(ReplayAction::SeekTo(at));
    let scene = session.scene();

    for line in summary_lines(race, &scene) {
        println!("{line}");
    }

    if let Some(path) = args.chart_out.as_deref() {
        let mut chart = ChartWriter::new(path)?;
        chart.bind(&scene)?;
        println!("Chart written to {}", chart.path().display());
    }

    Ok(())
}
