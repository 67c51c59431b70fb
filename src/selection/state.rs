use std::collections::BTreeSet;

use tracing::debug;

use crate::race::{Boat, Race};

/// Checked sections and unchecked classes.
///
/// Class options are regenerated from the checked sections every time they
/// are read and default to checked, so classes are stored as exclusions: an
/// unchecked class stays unchecked while its section is hidden and shown
/// again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    checked_sections: BTreeSet<String>,
    unchecked_classes: BTreeSet<String>,
}

impl SelectionState {
    /// Every section and class checked.
    #[must_use]
    pub fn new(race: &Race) -> Self {
        Self {
            checked_sections: race
                .sections
                .iter()
                .map(|section| section.id.clone())
                .collect(),
            unchecked_classes: BTreeSet::new(),
        }
    }

    /// Section ids in race order.
    #[must_use]
    pub fn section_options<'race>(&self, race: &'race Race) -> Vec<&'race str> {
        race.sections
            .iter()
            .map(|section| section.id.as_str())
            .collect()
    }

    /// Classes raced in the checked sections, in first-seen order.
    #[must_use]
    pub fn class_options<'race>(&self, race: &'race Race) -> Vec<&'race str> {
        let mut classes: Vec<&str> = Vec::new();
        for boat in &race.boats {
            if self.is_section_checked(&boat.section) && !classes.contains(&boat.class.as_str()) {
                classes.push(boat.class.as_str());
            }
        }
        classes
    }

    #[must_use]
    pub fn is_section_checked(&self, section: &str) -> bool {
        self.checked_sections.contains(section)
    }

    #[must_use]
    pub fn is_class_checked(&self, class: &str) -> bool {
        !self.unchecked_classes.contains(class)
    }

    /// Returns whether the selection changed.
    pub fn set_section(&mut self, section: &str, checked: bool) -> bool {
        let changed = if checked {
            self.checked_sections.insert(section.to_owned())
        } else {
            self.checked_sections.remove(section)
        };
        if changed {
            debug!(section, checked, "Section filter changed.");
        }
        changed
    }

    /// Returns whether the selection changed.
    pub fn set_class(&mut self, class: &str, checked: bool) -> bool {
        let changed = if checked {
            self.unchecked_classes.remove(class)
        } else {
            self.unchecked_classes.insert(class.to_owned())
        };
        if changed {
            debug!(class, checked, "Class filter changed.");
        }
        changed
    }

    pub fn toggle_section(&mut self, section: &str) -> bool {
        let checked = self.is_section_checked(section);
        self.set_section(section, !checked)
    }

    pub fn toggle_class(&mut self, class: &str) -> bool {
        let checked = self.is_class_checked(class);
        self.set_class(class, !checked)
    }

    /// Toggles the `index`-th entry of [`Self::section_options`]. Out of range
    /// indexes are ignored.
    pub fn toggle_section_at(&mut self, race: &Race, index: usize) -> bool {
        let Some(section) = self.section_options(race).get(index).copied() else {
            return false;
        };
        self.toggle_section(section)
    }

    /// Toggles the `index`-th entry of [`Self::class_options`]. Out of range
    /// indexes are ignored.
    pub fn toggle_class_at(&mut self, race: &Race, index: usize) -> bool {
        let Some(class) = self.class_options(race).get(index).copied() else {
            return false;
        };
        self.toggle_class(class)
    }

    #[must_use]
    pub fn is_active(&self, boat: &Boat) -> bool {
        self.is_section_checked(&boat.section) && self.is_class_checked(&boat.class)
    }

    /// Boats to draw, in race order.
    pub fn active_boats<'state>(
        &'state self,
        race: &'state Race,
    ) -> impl Iterator<Item = &'state Boat> {
        race.boats.iter().filter(|boat| self.is_active(boat))
    }

    #[must_use]
    pub fn active_boat_ids<'race>(&self, race: &'race Race) -> BTreeSet<&'race str> {
        race.boats
            .iter()
            .filter(|boat| self.is_active(boat))
            .map(|boat| boat.id.as_str())
            .collect()
    }
}
