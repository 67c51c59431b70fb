use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::tempdir;

use wakeline::race::{Race, TimeRange, parse_race_file, parse_roster};
use wakeline::replay::{PanDirection, ReplayAction};
use wakeline::scene::RenderBinder;

use crate::args::TimeBound;
use crate::args::test_support::parse_test_args;
use crate::ui::model::{FilterFocus, PlaybackLabel};

use super::bounds::{resolve_at, resolve_window};
use super::chart::ChartWriter;
use super::keys::{KeyCommand, map_key};
use super::runner::ui_overlay;
use super::setup::build_session;
use super::snapshots::{SnapshotIntervalState, SnapshotWriter};
use super::summary::{format_elapsed, summary_lines};

const BOATS_XML: &str = include_str!("../../../tests/fixtures/boats.xml");
const RACE_XML: &str = include_str!("../../../tests/fixtures/racedata.xml");

fn fixture_race() -> Result<Race, String> {
    let roster = parse_roster(BOATS_XML).map_err(|err| err.to_string())?;
    let file = parse_race_file(RACE_XML).map_err(|err| err.to_string())?;
    Race::assemble(&roster, file).map_err(|err| err.to_string())
}

fn race_range() -> TimeRange {
    TimeRange {
        min: 0.0,
        max: 600.0,
    }
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn json_files(dir: &std::path::Path) -> Result<usize, String> {
    let entries = std::fs::read_dir(dir).map_err(|err| format!("read_dir failed: {err}"))?;
    Ok(entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .count())
}

#[test]
fn resolve_window_defaults_to_race_range() -> Result<(), String> {
    let window = resolve_window(race_range(), None, None).map_err(|err| err.to_string())?;
    if window != race_range() {
        return Err(format!("Unexpected window {window:?}"));
    }

    let window = resolve_window(
        race_range(),
        Some(TimeBound::Offset(Duration::from_secs(60))),
        Some(TimeBound::Offset(Duration::from_secs(3_600))),
    )
    .map_err(|err| err.to_string())?;
    if (window.min - 60.0).abs() > 1e-9 || (window.max - 600.0).abs() > 1e-9 {
        return Err(format!("Offsets must clamp into the race, got {window:?}"));
    }
    Ok(())
}

#[test]
fn resolve_window_rejects_inverted_bounds() -> Result<(), String> {
    let inverted = resolve_window(
        race_range(),
        Some(TimeBound::Max),
        Some(TimeBound::Offset(Duration::from_secs(10))),
    );
    if inverted.is_ok() {
        return Err("Expected start after end to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn resolve_at_clamps_into_window() -> Result<(), String> {
    let window = TimeRange {
        min: 100.0,
        max: 300.0,
    };
    let cases = [
        (None, 300.0),
        (Some(TimeBound::Min), 100.0),
        (Some(TimeBound::Offset(Duration::from_secs(150))), 150.0),
        (Some(TimeBound::Offset(Duration::from_secs(500))), 300.0),
    ];
    for (at, expected) in cases {
        let resolved = resolve_at(race_range(), window, at);
        if (resolved - expected).abs() > 1e-9 {
            return Err(format!("{at:?} resolved to {resolved}, expected {expected}"));
        }
    }
    Ok(())
}

#[test]
fn build_session_hides_requested_filters() -> Result<(), String> {
    let race = fixture_race()?;
    let args = parse_test_args([
        "wakeline",
        "--hide-section",
        "B",
        "--hide-section",
        "Z",
        "--hide-class",
        "Surprise",
    ])
    .map_err(|err| err.to_string())?;

    let session = build_session(&race, &args).map_err(|err| err.to_string())?;
    let active = session.selection().active_boat_ids(&race);
    if active.into_iter().collect::<Vec<_>>() != ["11"] {
        return Err("Only boat 11 should stay active".to_owned());
    }
    if session.clock().is_running() {
        return Err("The clock must start stopped".to_owned());
    }
    Ok(())
}

#[test]
fn build_session_respects_window_and_zoom() -> Result<(), String> {
    let race = fixture_race()?;
    let args = parse_test_args(["wakeline", "--start", "1m", "--end", "5m", "--zoom", "2"])
        .map_err(|err| err.to_string())?;

    let session = build_session(&race, &args).map_err(|err| err.to_string())?;
    let clock = session.clock();
    if (clock.min_time() - 60.0).abs() > 1e-9 || (clock.max_time() - 300.0).abs() > 1e-9 {
        return Err(format!(
            "Unexpected window {}..{}",
            clock.min_time(),
            clock.max_time()
        ));
    }
    if (session.viewport().zoom_scale() - 2.0).abs() > 1e-9 {
        return Err("Initial zoom not applied".to_owned());
    }
    Ok(())
}

#[test]
fn keys_map_to_replay_actions() -> Result<(), String> {
    let cases = [
        (press(KeyCode::Char(' ')), Some(KeyCommand::Replay(ReplayAction::TogglePlay))),
        (press(KeyCode::Char('+')), Some(KeyCommand::Replay(ReplayAction::Accelerate))),
        (press(KeyCode::Home), Some(KeyCommand::Replay(ReplayAction::SeekStart))),
        (
            press(KeyCode::Left),
            Some(KeyCommand::Replay(ReplayAction::Pan(PanDirection::Left))),
        ),
        (press(KeyCode::Char('2')), Some(KeyCommand::Replay(ReplayAction::ToggleSection(1)))),
        (press(KeyCode::Tab), Some(KeyCommand::SwitchFocus)),
        (press(KeyCode::Esc), Some(KeyCommand::Quit)),
        (
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyCommand::Quit),
        ),
        (KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL), None),
        (press(KeyCode::F(5)), None),
    ];
    for (key, expected) in cases {
        let mapped = map_key(key, FilterFocus::Sections);
        if mapped != expected {
            return Err(format!("{key:?} mapped to {mapped:?}, expected {expected:?}"));
        }
    }

    let class_toggle = map_key(press(KeyCode::Char('3')), FilterFocus::Classes);
    if class_toggle != Some(KeyCommand::Replay(ReplayAction::ToggleClass(2))) {
        return Err(format!("Unexpected class toggle {class_toggle:?}"));
    }
    Ok(())
}

#[test]
fn interval_snapshots_cover_window_once() -> Result<(), String> {
    let race = fixture_race()?;
    let args = parse_test_args(["wakeline"]).map_err(|err| err.to_string())?;
    let session = build_session(&race, &args).map_err(|err| err.to_string())?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {err}"))?;

    let mut writer = SnapshotWriter::new(dir.path().join("snaps"), &race);
    let mut state = SnapshotIntervalState::new(Duration::from_secs(240), race_range())
        .map_err(|err| err.to_string())?;

    state
        .emit(&session, &mut writer, 250.0, false)
        .map_err(|err| err.to_string())?;
    if writer.written() != 2 {
        return Err(format!("Expected grid snapshots at 0 and 240, got {}", writer.written()));
    }

    let last = state
        .emit(&session, &mut writer, 600.0, true)
        .map_err(|err| err.to_string())?;
    if writer.written() != 4 || last.is_none() {
        return Err(format!("Expected 480 and the final 600, got {}", writer.written()));
    }

    state
        .emit(&session, &mut writer, 600.0, true)
        .map_err(|err| err.to_string())?;
    if writer.written() != 4 {
        return Err("Finalizing twice must not duplicate the last snapshot".to_owned());
    }
    if json_files(&dir.path().join("snaps"))? != 4 {
        return Err("Unexpected snapshot file count".to_owned());
    }
    Ok(())
}

#[test]
fn snapshot_document_contains_scene() -> Result<(), String> {
    let race = fixture_race()?;
    let args = parse_test_args(["wakeline"]).map_err(|err| err.to_string())?;
    let session = build_session(&race, &args).map_err(|err| err.to_string())?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {err}"))?;

    let mut writer = SnapshotWriter::new(dir.path().to_path_buf(), &race);
    writer
        .bind(&session.scene_at(300.0))
        .map_err(|err| err.to_string())?;
    let path = writer.last_path().ok_or("Missing snapshot path")?;
    let content = std::fs::read_to_string(path).map_err(|err| format!("read failed: {err}"))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|err| format!("invalid json: {err}"))?;

    let course = value.get("course").and_then(serde_json::Value::as_str);
    if course != Some("Petit-Lac") {
        return Err(format!("Unexpected course {course:?}"));
    }
    let boats = value
        .pointer("/scene/boats")
        .and_then(serde_json::Value::as_array)
        .ok_or("Missing scene boats")?;
    if boats.len() != 4 {
        return Err(format!("Expected 4 boats, got {}", boats.len()));
    }
    let time = value
        .pointer("/scene/time")
        .and_then(serde_json::Value::as_f64)
        .ok_or("Missing scene time")?;
    if (time - 300.0).abs() > 1e-9 {
        return Err(format!("Unexpected scene time {time}"));
    }
    Ok(())
}

#[test]
fn snapshot_grid_is_capped() -> Result<(), String> {
    match SnapshotIntervalState::new(Duration::from_millis(10), race_range()) {
        Ok(_) => return Err("Expected 60001 grid snapshots to be rejected".to_owned()),
        Err(err) if err.to_string().contains("60001 snapshots") => {}
        Err(err) => return Err(format!("Unexpected error: {err}")),
    }
    SnapshotIntervalState::new(Duration::from_millis(100), race_range())
        .map(drop)
        .map_err(|err| format!("6001 grid snapshots should be accepted: {err}"))
}

#[test]
fn snapshot_interval_must_be_positive() -> Result<(), String> {
    if SnapshotIntervalState::new(Duration::ZERO, race_range()).is_ok() {
        return Err("Expected zero interval to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn chart_writer_requires_png_and_writes_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {err}"))?;
    if ChartWriter::new(&dir.path().join("chart.svg")).is_ok() {
        return Err("Expected non-png chart path to be rejected".to_owned());
    }

    let race = fixture_race()?;
    let args = parse_test_args(["wakeline", "--width", "200", "--height", "160"])
        .map_err(|err| err.to_string())?;
    let session = build_session(&race, &args).map_err(|err| err.to_string())?;
    let path = dir.path().join("out").join("chart.png");
    let mut chart = ChartWriter::new(&path).map_err(|err| err.to_string())?;
    chart
        .bind(&session.scene_at(400.0))
        .map_err(|err| err.to_string())?;

    let size = std::fs::metadata(&path)
        .map_err(|err| format!("missing chart: {err}"))?
        .len();
    if size == 0 {
        return Err("Chart file is empty".to_owned());
    }
    Ok(())
}

#[test]
fn summary_lists_shown_boats() -> Result<(), String> {
    let race = fixture_race()?;
    let args = parse_test_args(["wakeline", "--hide-section", "A"])
        .map_err(|err| err.to_string())?;
    let session = build_session(&race, &args).map_err(|err| err.to_string())?;

    let lines = summary_lines(&race, &session.scene_at(30.0));
    let header = lines.first().ok_or("Missing header")?;
    if !header.contains("Petit-Lac") || !header.contains("2 of 4 boats") {
        return Err(format!("Unexpected header: {header}"));
    }
    if lines.len() != 3 {
        return Err(format!("Expected 2 boat lines, got {lines:?}"));
    }
    if !lines.iter().skip(1).all(|line| line.contains("no position yet")) {
        return Err("Section B starts at 60s; no boat has a position at 30s".to_owned());
    }
    Ok(())
}

#[test]
fn elapsed_time_is_formatted_as_clock() -> Result<(), String> {
    let cases = [(0.0, "00:00:00"), (3_725.9, "01:02:05"), (-5.0, "00:00:00")];
    for (seconds, expected) in cases {
        let formatted = format_elapsed(seconds);
        if formatted != expected {
            return Err(format!("{seconds} formatted as {formatted}"));
        }
    }
    Ok(())
}

#[test]
fn overlay_reflects_session_state() -> Result<(), String> {
    let race = fixture_race()?;
    let args = parse_test_args(["wakeline", "--hide-class", "Esse"])
        .map_err(|err| err.to_string())?;
    let mut session = build_session(&race, &args).map_err(|err| err.to_string())?;

    let overlay = ui_overlay(&session, FilterFocus::Classes, None, true);
    if overlay.status.playback != PlaybackLabel::Paused {
        return Err("Expected paused status".to_owned());
    }
    if overlay.status.shown_boats != 3 || overlay.status.total_boats != 4 {
        return Err("Unexpected boat counts".to_owned());
    }
    let labels: Vec<(&str, bool)> = overlay
        .classes
        .iter()
        .map(|entry| (entry.label.as_str(), entry.checked))
        .collect();
    if labels != [("J80", true), ("Surprise", true), ("Esse", false)] {
        return Err(format!("Unexpected class entries {labels:?}"));
    }

    session.apply(ReplayAction::SeekEnd);
    let finished = ui_overlay(&session, FilterFocus::Sections, None, true);
    if finished.status.playback != PlaybackLabel::Finished || finished.status.total != "00:10:00"
    {
        return Err("Expected finished status at the end of the window".to_owned());
    }
    Ok(())
}
