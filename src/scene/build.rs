use tracing::trace;

use crate::geo::{GeoProjector, Viewport};
use crate::race::{Mark, Position, Race};
use crate::sampling::TrackSampler;
use crate::selection::SelectionState;

use super::types::{BoatTrace, Scene, SceneMark, ScenePoint};

/// Samples and projects every active boat at `time`, plus the course marks
/// and the committee boat.
#[must_use]
pub fn build_scene(
    race: &Race,
    selection: &SelectionState,
    time: f64,
    viewport: &Viewport,
    projector: &GeoProjector,
    sampler: &TrackSampler,
) -> Scene {
    let zoom_scale = viewport.zoom_scale();
    let boats: Vec<BoatTrace> = selection
        .active_boats(race)
        .map(|boat| {
            let sampled = sampler.sample(boat.track.positions(), time, viewport, zoom_scale);
            BoatTrace {
                id: boat.id.clone(),
                name: boat.name.clone(),
                class: boat.class.clone(),
                section: boat.section.clone(),
                color: boat.color,
                runs: sampled
                    .runs
                    .iter()
                    .map(|run| run.iter().map(|position| project_point(projector, position)).collect())
                    .collect(),
                marker_visible: sampled
                    .marker
                    .is_some_and(|marker| viewport.contains(&marker)),
                marker: sampled
                    .marker
                    .map(|marker| project_point(projector, &marker)),
            }
        })
        .collect();

    trace!(time, boats = boats.len(), "Built scene.");

    Scene {
        time,
        width: projector.width(),
        height: projector.height(),
        x_domain: viewport.x_domain(),
        y_domain: viewport.y_domain(),
        zoom_scale,
        course_looped: race.course.looped,
        boats,
        marks: race
            .course
            .marks
            .iter()
            .map(|mark| project_mark(projector, mark))
            .collect(),
        committee: race
            .committee
            .as_ref()
            .map(|mark| project_mark(projector, mark)),
    }
}

fn project_point(projector: &GeoProjector, position: &Position) -> ScenePoint {
    let (x, y) = projector.project(position.lat, position.lon);
    ScenePoint {
        time: position.time,
        lat: position.lat,
        lon: position.lon,
        x,
        y,
    }
}

fn project_mark(projector: &GeoProjector, mark: &Mark) -> SceneMark {
    let (x, y) = projector.project(mark.lat, mark.lon);
    SceneMark {
        id: mark.id.clone(),
        lat: mark.lat,
        lon: mark.lon,
        x,
        y,
    }
}
