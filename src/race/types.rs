use serde::Serialize;

use super::color::BoatColor;

/// One timestamped GPS sample. `time` is in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub time: f64,
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    #[must_use]
    pub const fn new(time: f64, lat: f64, lon: f64) -> Self {
        Self { time, lat, lon }
    }
}

/// Time-ordered position history of one boat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    positions: Vec<Position>,
}

impl Track {
    /// Builds a track, ordering samples by time. Equal timestamps keep their
    /// file order.
    #[must_use]
    pub fn new(mut positions: Vec<Position>) -> Self {
        positions.sort_by(|left, right| left.time.total_cmp(&right.time));
        Self { positions }
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn time_range(&self) -> Option<TimeRange> {
        let first = self.positions.first()?;
        let last = self.positions.last()?;
        Some(TimeRange {
            min: first.time,
            max: last.time,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

impl TimeRange {
    #[must_use]
    pub const fn span(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub color: BoatColor,
    pub section: Option<String>,
    pub class: String,
    pub rating: Option<String>,
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Course {
    pub looped: bool,
    /// Longitude/latitude extent ratio the chart is fitted to.
    pub ratio: Option<f64>,
    pub raw_ratio: Option<String>,
    pub marks: Vec<Mark>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceBoat {
    pub id: String,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceSection {
    pub id: String,
    pub start: Option<String>,
    pub boats: Vec<RaceBoat>,
}

/// Race document as parsed, before it is joined with the roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceFile {
    pub date: Option<String>,
    pub course_name: Option<String>,
    pub committee: Option<Mark>,
    pub course: Course,
    pub sections: Vec<RaceSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub start: Option<String>,
}

/// A raced boat joined with its roster entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    pub id: String,
    pub name: String,
    pub color: BoatColor,
    pub class: String,
    /// Section the boat raced in, taken from the race document.
    pub section: String,
    pub rating: Option<String>,
    pub flag: Option<String>,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub date: Option<String>,
    pub course_name: Option<String>,
    pub committee: Option<Mark>,
    pub course: Course,
    pub sections: Vec<Section>,
    pub boats: Vec<Boat>,
    pub time_range: TimeRange,
}

impl Race {
    #[must_use]
    pub fn boat(&self, id: &str) -> Option<&Boat> {
        self.boats.iter().find(|boat| boat.id == id)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.boats
            .iter()
            .flat_map(|boat| boat.track.positions().iter())
    }
}
