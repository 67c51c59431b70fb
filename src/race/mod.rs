//! Race dataset: roster, boat tracks, course marks and the XML loader.
//!
//! A [`Race`] is assembled once at load time from the roster (`boats.xml`) and
//! the race document (`racedata.xml`) and is read-only for the rest of the
//! replay.
mod assemble;
mod color;
mod types;
mod xml;

#[cfg(test)]
pub(crate) mod test_support;

pub use color::BoatColor;
pub use types::{
    Boat, Course, Mark, Position, Race, RaceBoat, RaceFile, RaceSection, Roster, RosterEntry,
    Section, TimeRange, Track,
};
pub use xml::{load_race_file, load_roster, parse_race_file, parse_roster};
