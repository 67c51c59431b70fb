use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Local, SecondsFormat};
use serde::Serialize;
use tracing::info;

use wakeline::error::{AppError, AppResult, ExportError};
use wakeline::race::{Race, TimeRange};
use wakeline::replay::ReplaySession;
use wakeline::scene::{RenderBinder, Scene};

/// Upper bound on grid snapshots in one replay window.
pub(super) const MAX_SNAPSHOTS: u32 = 10_000;

/// Snapshot times on a fixed race-time grid `min, min + interval, ..`, with a
/// final snapshot at the cursor when the run finishes off-grid.
pub(super) struct SnapshotIntervalState {
    interval: f64,
    start: f64,
    end: f64,
    next_index: u32,
    last_written: Option<f64>,
}

impl SnapshotIntervalState {
    pub(super) fn new(interval: Duration, window: TimeRange) -> AppResult<Self> {
        let interval = interval.as_secs_f64();
        if !interval.is_normal() {
            return Err(AppError::export(ExportError::SnapshotIntervalTooSmall));
        }
        let grid = (window.span().max(0.0) / interval).floor() + 1.0;
        if grid > f64::from(MAX_SNAPSHOTS) {
            return Err(AppError::export(ExportError::TooManySnapshots {
                count: grid.min(u64::MAX as f64) as u64,
                max: MAX_SNAPSHOTS,
            }));
        }
        Ok(Self {
            interval,
            start: window.min,
            end: window.max,
            next_index: 0,
            last_written: None,
        })
    }

    fn next_time(&self) -> f64 {
        f64::from(self.next_index).mul_add(self.interval, self.start)
    }

    /// Writes every grid snapshot up to `current`. With `finalize`, also
    /// writes `current` itself unless it was just written.
    pub(super) fn emit(
        &mut self,
        session: &ReplaySession<'_>,
        writer: &mut SnapshotWriter,
        current: f64,
        finalize: bool,
    ) -> AppResult<Option<PathBuf>> {
        let current = current.min(self.end);
        let mut last_path = None;

        while self.next_time() <= current {
            let time = self.next_time();
            writer.bind(&session.scene_at(time))?;
            last_path = writer.last_path().map(Path::to_path_buf);
            self.last_written = Some(time);
            self.next_index = self.next_index.saturating_add(1);
        }

        let behind = self
            .last_written
            .is_none_or(|written| written < current);
        if finalize && behind && current >= self.start {
            writer.bind(&session.scene_at(current))?;
            last_path = writer.last_path().map(Path::to_path_buf);
            self.last_written = Some(current);
        }

        Ok(last_path)
    }
}

#[derive(Debug, Serialize)]
struct SnapshotDocument<'doc> {
    generated_at: String,
    race_date: Option<&'doc str>,
    course: Option<&'doc str>,
    scene: &'doc Scene,
}

/// Writes each bound scene as a pretty-printed JSON document in `dir`.
pub(super) struct SnapshotWriter {
    dir: PathBuf,
    race_date: Option<String>,
    course: Option<String>,
    written: usize,
    last_path: Option<PathBuf>,
}

impl SnapshotWriter {
    pub(super) fn new(dir: PathBuf, race: &Race) -> Self {
        Self {
            dir,
            race_date: race.date.clone(),
            course: race.course_name.clone(),
            written: 0,
            last_path: None,
        }
    }

    pub(super) fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    pub(super) const fn written(&self) -> usize {
        self.written
    }

    fn ensure_dir(&self) -> AppResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|err| {
            AppError::export(ExportError::CreateDir {
                path: self.dir.clone(),
                source: err,
            })
        })
    }
}

impl RenderBinder for SnapshotWriter {
    fn bind(&mut self, scene: &Scene) -> AppResult<()> {
        self.ensure_dir()?;
        let now = Local::now();
        let file_name = format!(
            "snapshot-{}-{:04}-t{:.0}.json",
            now.format("%Y%m%dT%H%M%S"),
            self.written,
            scene.time
        );
        let path = self.dir.join(file_name);

        let document = SnapshotDocument {
            generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            race_date: self.race_date.as_deref(),
            course: self.course.as_deref(),
            scene,
        };
        let content = serde_json::to_string_pretty(&document).map_err(|err| {
            AppError::export(ExportError::Serialize {
                path: path.clone(),
                source: err,
            })
        })?;
        std::fs::write(&path, content).map_err(|err| {
            AppError::export(ExportError::Write {
                path: path.clone(),
                source: err,
            })
        })?;

        info!(path = %path.display(), time = scene.time, "Wrote scene snapshot.");
        self.written = self.written.saturating_add(1);
        self.last_path = Some(path);
        Ok(())
    }
}
