use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::error::DatasetError;

use super::types::{Boat, Race, RaceFile, Roster, Section, TimeRange};

impl Race {
    /// Joins the race document with the roster.
    ///
    /// Race boats missing from the roster are skipped, as are repeated boat
    /// ids; roster entries that never raced are ignored. Neither aborts the
    /// load.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NoSamples`] when no boat has a single valid
    /// position sample.
    pub fn assemble(roster: &Roster, file: RaceFile) -> Result<Self, DatasetError> {
        let mut boats: Vec<Boat> = Vec::new();
        let mut sections = Vec::with_capacity(file.sections.len());
        let mut seen = BTreeSet::new();

        for section in file.sections {
            if !sections.iter().any(|known: &Section| known.id == section.id) {
                sections.push(Section {
                    id: section.id.clone(),
                    start: section.start.clone(),
                });
            }
            for race_boat in section.boats {
                let Some(entry) = roster.get(&race_boat.id) else {
                    warn!(
                        boat = %race_boat.id,
                        section = %section.id,
                        "Boat missing from roster; skipped."
                    );
                    continue;
                };
                if !seen.insert(race_boat.id.clone()) {
                    warn!(boat = %race_boat.id, "Boat listed twice; later entry skipped.");
                    continue;
                }
                if race_boat.track.is_empty() {
                    debug!(boat = %race_boat.id, "Boat has no valid position samples.");
                }
                boats.push(Boat {
                    id: race_boat.id,
                    name: entry.name.clone(),
                    color: entry.color,
                    class: entry.class.clone(),
                    section: section.id.clone(),
                    rating: entry.rating.clone(),
                    flag: entry.flag.clone(),
                    track: race_boat.track,
                });
            }
        }

        for entry in &roster.entries {
            if !seen.contains(&entry.id) {
                debug!(boat = %entry.id, "Roster boat did not race.");
            }
        }

        let time_range = boats
            .iter()
            .filter_map(|boat| boat.track.time_range())
            .reduce(TimeRange::merge)
            .ok_or(DatasetError::NoSamples)?;

        info!(
            boats = boats.len(),
            sections = sections.len(),
            start = time_range.min,
            end = time_range.max,
            "Race assembled."
        );

        Ok(Self {
            date: file.date,
            course_name: file.course_name,
            committee: file.committee,
            course: file.course,
            sections,
            boats,
            time_range,
        })
    }

    /// Aspect ratio the chart is fitted to: the override when given, else the
    /// course ratio.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidRatio`] when neither is a positive number.
    pub fn aspect_ratio(&self, override_ratio: Option<f64>) -> Result<f64, DatasetError> {
        override_ratio
            .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
            .or(self.course.ratio)
            .ok_or_else(|| DatasetError::InvalidRatio {
                value: self.course.raw_ratio.clone().unwrap_or_default(),
            })
    }
}
