use serde::Serialize;

use crate::race::BoatColor;

/// A sample in both geographic and screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePoint {
    pub time: f64,
    pub lat: f64,
    pub lon: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneMark {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoatTrace {
    pub id: String,
    pub name: String,
    pub class: String,
    pub section: String,
    pub color: BoatColor,
    pub runs: Vec<Vec<ScenePoint>>,
    /// Latest known position, `None` before the boat's first sample.
    pub marker: Option<ScenePoint>,
    pub marker_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub time: f64,
    pub width: f64,
    pub height: f64,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    pub zoom_scale: f64,
    pub course_looped: bool,
    pub boats: Vec<BoatTrace>,
    pub marks: Vec<SceneMark>,
    pub committee: Option<SceneMark>,
}

impl Scene {
    #[must_use]
    pub fn boat(&self, id: &str) -> Option<&BoatTrace> {
        self.boats.iter().find(|boat| boat.id == id)
    }

    /// Number of projected track points across all boats.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.boats
            .iter()
            .flat_map(|boat| boat.runs.iter())
            .map(Vec::len)
            .sum()
    }
}
