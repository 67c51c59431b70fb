use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use wakeline::error::{AppError, AppResult};
use wakeline::race::TimeRange;
use wakeline::replay::{ClockState, ReplaySession};
use wakeline::scene::RenderBinder;

use crate::args::{ReplayArgs, default_chart_path, default_snapshot_dir};
use crate::shutdown::shutdown_channel;
use crate::ui::binder::UiBinder;
use crate::ui::model::{FilterEntry, FilterFocus, PlaybackLabel, ReplayStatus, UiData};
use crate::ui::render::setup_render_ui;

use super::chart::ChartWriter;
use super::headless::run_headless;
use super::keys::{KeyCommand, map_key};
use super::setup::{build_session, load_race};
use super::snapshots::{SnapshotIntervalState, SnapshotWriter};
use super::summary::format_elapsed;

/// Sleep between keyboard polls while waiting for the next tick.
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(20);
/// Non-blocking poll interval for keyboard events.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(0);

pub(crate) async fn run_replay(args: &ReplayArgs, interactive: bool) -> AppResult<()> {
    let race = load_race(args)?;
    let mut session = build_session(&race, args)?;

    if !interactive {
        return run_headless(&mut session, args);
    }
    run_interactive(&mut session, args).await
}

async fn run_interactive(session: &mut ReplaySession<'_>, args: &ReplayArgs) -> AppResult<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_handle = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_handle.store(true, Ordering::SeqCst);
        }
    });

    let (shutdown_tx, _) = shutdown_channel();
    let initial_ui = UiData {
        no_color: args.no_color,
        ..UiData::default()
    };
    let (ui_tx, _) = watch::channel(initial_ui.clone());
    let render_ui_handle = setup_render_ui(&shutdown_tx, &ui_tx);
    let mut binder = UiBinder::new(ui_tx, initial_ui);

    let window = TimeRange {
        min: session.clock().min_time(),
        max: session.clock().max_time(),
    };
    let mut snapshot_writer = SnapshotWriter::new(
        args.snapshot_out.clone().unwrap_or_else(default_snapshot_dir),
        session.race(),
    );
    let mut snapshot_interval_state = args
        .snapshot_interval
        .map(|interval| SnapshotIntervalState::new(interval, window))
        .transpose()?;
    let chart_path = args.chart_out.clone().unwrap_or_else(default_chart_path);

    let mut ticker = tokio::time::interval(args.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut focus = FilterFocus::default();
    let mut message: Option<String> = None;
    let mut dirty = true;

    let result = async {
        loop {
            if stop.load(Ordering::SeqCst) {
                break;
            }

            if event::poll(EVENT_POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(command) = map_key(key, focus)
            {
                match command {
                    KeyCommand::Quit => break,
                    KeyCommand::Replay(action) => {
                        if session.apply(action) {
                            message = None;
                            dirty = true;
                        }
                    }
                    KeyCommand::SwitchFocus => {
                        focus = focus.toggled();
                        dirty = true;
                    }
                    KeyCommand::WriteSnapshot => {
                        let outcome = snapshot_writer.bind(&session.scene()).map(|()| {
                            snapshot_writer
                                .last_path()
                                .map(Path::display)
                                .map(|path| format!("Snapshot written to {path}"))
                        });
                        message = Some(report(outcome, "Snapshot"));
                        dirty = true;
                    }
                    KeyCommand::WriteChart => {
                        let outcome = ChartWriter::new(&chart_path).and_then(|mut chart| {
                            chart.bind(&session.scene())?;
                            Ok(Some(format!("Chart written to {}", chart.path().display())))
                        });
                        message = Some(report(outcome, "Chart"));
                        dirty = true;
                    }
                }
            }

            tokio::select! {
                _ = ticker.tick() => {
                    if session.tick() {
                        dirty = true;
                    }
                }
                () = tokio::time::sleep(KEY_POLL_INTERVAL) => {}
            }

            if let Some(interval_state) = snapshot_interval_state.as_mut() {
                interval_state.emit(
                    session,
                    &mut snapshot_writer,
                    session.clock().current_time(),
                    false,
                )?;
            }

            if dirty {
                binder.set_overlay(ui_overlay(session, focus, message.clone(), args.no_color));
                binder.bind(&session.scene())?;
                dirty = false;
            }
        }

        if let Some(interval_state) = snapshot_interval_state.as_mut() {
            interval_state.emit(
                session,
                &mut snapshot_writer,
                session.clock().current_time(),
                true,
            )?;
        }

        Ok::<(), AppError>(())
    }
    .await;

    drop(shutdown_tx.send(()));
    if let Err(err) = render_ui_handle.await {
        eprintln!("Replay UI task failed: {}", err);
    }
    if snapshot_writer.written() > 0 {
        info!(count = snapshot_writer.written(), "Snapshots written.");
    }
    result
}

fn report(outcome: AppResult<Option<String>>, what: &str) -> String {
    match outcome {
        Ok(Some(done)) => done,
        Ok(None) => format!("{what} written"),
        Err(err) => {
            warn!(error = %err, "{what} export failed.");
            format!("{what} failed: {err}")
        }
    }
}

/// Status and filter panels for the session's current state.
pub(super) fn ui_overlay(
    session: &ReplaySession<'_>,
    focus: FilterFocus,
    message: Option<String>,
    no_color: bool,
) -> UiData {
    let race = session.race();
    let clock = session.clock();
    let selection = session.selection();

    let playback = match clock.state() {
        ClockState::Running => PlaybackLabel::Playing,
        ClockState::Stopped { at_max: true } => PlaybackLabel::Finished,
        ClockState::Stopped { at_max: false } => PlaybackLabel::Paused,
    };
    let title = match (race.date.as_deref(), race.course_name.as_deref()) {
        (Some(date), Some(course)) => format!("{date} {course}"),
        (Some(label), None) | (None, Some(label)) => label.to_owned(),
        (None, None) => "Race".to_owned(),
    };

    UiData {
        scene: None,
        status: ReplayStatus {
            title,
            elapsed: format_elapsed(clock.current_time() - clock.min_time()),
            total: format_elapsed(clock.max_time() - clock.min_time()),
            progress: clock.progress(),
            playback,
            speed_ratio: session.speed_ratio(),
            zoom_scale: session.viewport().zoom_scale(),
            shown_boats: selection.active_boats(race).count(),
            total_boats: race.boats.len(),
        },
        sections: selection
            .section_options(race)
            .into_iter()
            .map(|section| FilterEntry {
                label: section.to_owned(),
                checked: selection.is_section_checked(section),
            })
            .collect(),
        classes: selection
            .class_options(race)
            .into_iter()
            .map(|class| FilterEntry {
                label: class.to_owned(),
                checked: selection.is_class_checked(class),
            })
            .collect(),
        focus,
        message,
        no_color,
    }
}
