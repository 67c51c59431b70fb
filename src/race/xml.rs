use std::path::Path;

use roxmltree::{Document, Node};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult, DatasetError};

use super::color::BoatColor;
use super::types::{
    Course, Mark, Position, RaceBoat, RaceFile, RaceSection, Roster, RosterEntry, Track,
};

/// Label used for the race committee boat marker.
const COMMITTEE_ID: &str = "Race Committee";

/// Reads and parses a roster document (`<boat id name color section class .../>`).
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not well-formed XML.
pub fn load_roster(path: &Path) -> AppResult<Roster> {
    let content = read_dataset(path)?;
    parse_roster(&content).map_err(AppError::from)
}

/// Reads and parses a race document.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not well-formed XML, or
/// has no `<race>`/`<course>` element.
pub fn load_race_file(path: &Path) -> AppResult<RaceFile> {
    let content = read_dataset(path)?;
    parse_race_file(&content).map_err(AppError::from)
}

fn read_dataset(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|err| {
        AppError::dataset(DatasetError::Read {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

/// Parses roster XML. Entries without an id are skipped.
///
/// # Errors
///
/// Returns an error when the document is not well-formed XML.
pub fn parse_roster(content: &str) -> Result<Roster, DatasetError> {
    let doc = Document::parse(content).map_err(|source| DatasetError::Xml { source })?;
    let mut entries = Vec::new();
    for node in doc.descendants().filter(|node| node.has_tag_name("boat")) {
        let Some(id) = non_empty_attribute(node, "id") else {
            warn!("Roster boat without id skipped.");
            continue;
        };
        let color = match node.attribute("color") {
            Some(raw) => raw.parse::<BoatColor>().unwrap_or_else(|err| {
                warn!(boat = id, "{err} Using fallback color.");
                BoatColor::FALLBACK
            }),
            None => BoatColor::FALLBACK,
        };
        entries.push(RosterEntry {
            id: id.to_owned(),
            name: non_empty_attribute(node, "name").unwrap_or(id).to_owned(),
            color,
            section: non_empty_attribute(node, "section").map(str::to_owned),
            class: node.attribute("class").unwrap_or_default().trim().to_owned(),
            rating: non_empty_attribute(node, "rating").map(str::to_owned),
            flag: non_empty_attribute(node, "flag").map(str::to_owned),
        });
    }
    debug!(boats = entries.len(), "Parsed roster.");
    Ok(Roster { entries })
}

/// Parses race XML. Only the first `<race>` and its first `<course>` are used.
/// Position samples with a missing or non-numeric `t`, `l` or `o` attribute
/// are dropped from their track.
///
/// # Errors
///
/// Returns an error when the document is not well-formed XML or lacks a
/// `<race>` or `<course>` element.
pub fn parse_race_file(content: &str) -> Result<RaceFile, DatasetError> {
    let doc = Document::parse(content).map_err(|source| DatasetError::Xml { source })?;
    let mut races = doc.descendants().filter(|node| node.has_tag_name("race"));
    let race = races.next().ok_or(DatasetError::MissingRace)?;
    let extra_races = races.count();
    if extra_races > 0 {
        warn!(ignored = extra_races, "Only the first race is replayed.");
    }

    let mut courses = race
        .descendants()
        .filter(|node| node.has_tag_name("course"));
    let course_node = courses.next().ok_or(DatasetError::MissingCourse)?;
    let extra_courses = courses.count();
    if extra_courses > 0 {
        warn!(ignored = extra_courses, "Only the first course is drawn.");
    }

    let committee = match (
        parse_number(race.attribute("rclat")),
        parse_number(race.attribute("rclon")),
    ) {
        (Some(lat), Some(lon)) => Some(Mark {
            id: COMMITTEE_ID.to_owned(),
            lat,
            lon,
        }),
        _ => None,
    };

    let sections = race
        .descendants()
        .filter(|node| node.has_tag_name("section"))
        .map(parse_section)
        .collect();

    Ok(RaceFile {
        date: non_empty_attribute(race, "date").map(str::to_owned),
        course_name: non_empty_attribute(race, "course").map(str::to_owned),
        committee,
        course: parse_course(course_node),
        sections,
    })
}

fn parse_course(node: Node<'_, '_>) -> Course {
    let raw_ratio = node.attribute("ratio").map(str::to_owned);
    let ratio = parse_number(node.attribute("ratio")).filter(|ratio| *ratio > 0.0);
    let mut marks = Vec::new();
    for mark in node.descendants().filter(|child| child.has_tag_name("m")) {
        let id = mark.attribute("id").unwrap_or_default().to_owned();
        match (
            parse_number(mark.attribute("lat")),
            parse_number(mark.attribute("lon")),
        ) {
            (Some(lat), Some(lon)) => marks.push(Mark { id, lat, lon }),
            _ => warn!(mark = %id, "Mark with invalid coordinates skipped."),
        }
    }
    Course {
        looped: node
            .attribute("loop")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true")),
        ratio,
        raw_ratio,
        marks,
    }
}

fn parse_section(node: Node<'_, '_>) -> RaceSection {
    let id = node.attribute("id").unwrap_or_default().to_owned();
    let mut boats = Vec::new();
    for boat in node.descendants().filter(|child| child.has_tag_name("boat")) {
        let Some(boat_id) = non_empty_attribute(boat, "id") else {
            warn!(section = %id, "Race boat without id skipped.");
            continue;
        };
        let mut positions = Vec::new();
        let mut dropped = 0usize;
        for sample in boat.descendants().filter(|child| child.has_tag_name("p")) {
            match parse_position(sample) {
                Some(position) => positions.push(position),
                None => dropped = dropped.saturating_add(1),
            }
        }
        if dropped > 0 {
            warn!(
                boat = boat_id,
                dropped, "Dropped position samples with unparsable time/lat/lon."
            );
        }
        boats.push(RaceBoat {
            id: boat_id.to_owned(),
            track: Track::new(positions),
        });
    }
    RaceSection {
        id,
        start: non_empty_attribute(node, "start").map(str::to_owned),
        boats,
    }
}

fn parse_position(node: Node<'_, '_>) -> Option<Position> {
    Some(Position {
        time: parse_number(node.attribute("t"))?,
        lat: parse_number(node.attribute("l"))?,
        lon: parse_number(node.attribute("o"))?,
    })
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

fn non_empty_attribute<'doc>(node: Node<'doc, '_>, name: &str) -> Option<&'doc str> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
