use tracing::{info, warn};

use wakeline::error::{AppError, AppResult, ValidationError};
use wakeline::geo::{BoundingBox, Viewport};
use wakeline::race::{Race, load_race_file, load_roster};
use wakeline::replay::{ReplayClock, ReplaySession, SessionSettings, default_step};

use crate::args::ReplayArgs;

use super::bounds::resolve_window;

/// Loads and assembles the race named by `--race`/`--boats`.
pub(super) fn load_race(args: &ReplayArgs) -> AppResult<Race> {
    let race_path = args
        .race
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingRacePath))?;
    let boats_path = args
        .boats
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingBoatsPath))?;

    let roster = load_roster(boats_path)?;
    let file = load_race_file(race_path)?;
    let race = Race::assemble(&roster, file)?;
    info!(
        boats = race.boats.len(),
        sections = race.sections.len(),
        marks = race.course.marks.len(),
        start = race.time_range.min,
        end = race.time_range.max,
        "Loaded race."
    );
    Ok(race)
}

pub(super) fn build_session<'race>(
    race: &'race Race,
    args: &ReplayArgs,
) -> AppResult<ReplaySession<'race>> {
    let window = resolve_window(race.time_range, args.start, args.end)?;
    let ratio = race.aspect_ratio(args.tuning.aspect_ratio)?;
    let bounds = BoundingBox::fit(race.positions(), race.course.marks.iter(), ratio)?;
    let viewport = Viewport::with_zoom(bounds, args.zoom);
    let clock = ReplayClock::new(
        window,
        default_step(window, args.tick, args.replay_duration),
    );

    let mut session = ReplaySession::new(race, viewport, clock, session_settings(args));
    hide_filters(&mut session, args);
    Ok(session)
}

pub(super) fn session_settings(args: &ReplayArgs) -> SessionSettings {
    SessionSettings {
        speed_factor: args.speed_factor,
        max_speed_ratio: args.tuning.max_speed_ratio,
        seek_fraction: args.tuning.seek_fraction,
        pan_fraction: args.tuning.pan_fraction,
        zoom_step: args.tuning.zoom_step,
        width: args.width,
        height: args.height,
    }
}

fn hide_filters(session: &mut ReplaySession<'_>, args: &ReplayArgs) {
    let race = session.race();
    for section in &args.hide_sections {
        if !race.sections.iter().any(|known| &known.id == section) {
            warn!(section = %section, "Unknown section in --hide-section; ignoring.");
            continue;
        }
        session.selection_mut().set_section(section, false);
    }
    for class in &args.hide_classes {
        if !race.boats.iter().any(|boat| &boat.class == class) {
            warn!(class = %class, "Unknown class in --hide-class; ignoring.");
            continue;
        }
        session.selection_mut().set_class(class, false);
    }
}
