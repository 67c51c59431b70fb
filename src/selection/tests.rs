use crate::error::{AppError, AppResult};
use crate::race::test_support::sample_race;

use super::SelectionState;

#[test]
fn everything_is_checked_initially() -> AppResult<()> {
    let race = sample_race()?;
    let selection = SelectionState::new(&race);
    if selection.active_boat_ids(&race).len() != race.boats.len() {
        return Err(AppError::validation("Every boat should be active"));
    }
    if selection.class_options(&race) != ["J80", "Surprise", "Esse"] {
        return Err(AppError::validation(format!(
            "Unexpected classes {:?}",
            selection.class_options(&race)
        )));
    }
    Ok(())
}

#[test]
fn class_options_follow_checked_sections() -> AppResult<()> {
    let race = sample_race()?;
    let mut selection = SelectionState::new(&race);
    selection.set_section("A", false);
    if selection.class_options(&race) != ["J80", "Esse"] {
        return Err(AppError::validation(format!(
            "Unexpected classes {:?}",
            selection.class_options(&race)
        )));
    }
    let active: Vec<&str> = selection
        .active_boats(&race)
        .map(|boat| boat.id.as_str())
        .collect();
    if active != ["3", "4"] {
        return Err(AppError::validation(format!("Unexpected boats {:?}", active)));
    }
    Ok(())
}

#[test]
fn section_round_trip_restores_boat_set() -> AppResult<()> {
    let race = sample_race()?;
    let mut selection = SelectionState::new(&race);
    selection.set_class("Surprise", false);
    let before = selection.active_boat_ids(&race);
    if before.contains("2") {
        return Err(AppError::validation("Unchecked class must hide its boats"));
    }

    selection.toggle_section("A");
    if selection.is_section_checked("A") || selection.active_boat_ids(&race).contains("1") {
        return Err(AppError::validation("Section A should be hidden"));
    }
    selection.toggle_section("A");

    let after = selection.active_boat_ids(&race);
    if before != after {
        return Err(AppError::validation(format!(
            "Boat set changed from {:?} to {:?}",
            before, after
        )));
    }
    Ok(())
}

#[test]
fn toggles_by_index_ignore_out_of_range() -> AppResult<()> {
    let race = sample_race()?;
    let mut selection = SelectionState::new(&race);
    if selection.toggle_section_at(&race, 5) || selection.toggle_class_at(&race, 9) {
        return Err(AppError::validation("Out of range toggles must be no-ops"));
    }
    if !selection.toggle_class_at(&race, 0) || selection.is_class_checked("J80") {
        return Err(AppError::validation("First class toggle should uncheck J80"));
    }
    let active: Vec<&str> = selection
        .active_boats(&race)
        .map(|boat| boat.id.as_str())
        .collect();
    if active != ["2", "4"] {
        return Err(AppError::validation(format!("Unexpected boats {:?}", active)));
    }
    Ok(())
}
