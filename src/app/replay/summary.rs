use wakeline::race::Race;
use wakeline::scene::{BoatTrace, Scene};

/// Formats a race-time offset in seconds as `hh:mm:ss`.
pub(super) fn format_elapsed(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!(
        "{:02}:{:02}:{:02}",
        total / 3_600,
        (total / 60) % 60,
        total % 60
    )
}

/// Plain-text report of `scene`: one header line, then one line per drawn
/// boat.
pub(super) fn summary_lines(race: &Race, scene: &Scene) -> Vec<String> {
    let mut lines = Vec::with_capacity(scene.boats.len().saturating_add(1));
    lines.push(format!(
        "{} {} | t={} ({:.0}) | {} of {} boats | {} points",
        race.date.as_deref().unwrap_or("-"),
        race.course_name.as_deref().unwrap_or("-"),
        format_elapsed(scene.time - race.time_range.min),
        scene.time,
        scene.boats.len(),
        race.boats.len(),
        scene.point_count()
    ));
    lines.extend(scene.boats.iter().map(boat_line));
    lines
}

fn boat_line(boat: &BoatTrace) -> String {
    let position = boat.marker.as_ref().map_or_else(
        || "no position yet".to_owned(),
        |marker| {
            format!(
                "{:.5},{:.5} @ {:.0}{}",
                marker.lat,
                marker.lon,
                marker.time,
                if boat.marker_visible { "" } else { " (off view)" }
            )
        },
    );
    format!(
        "{:>4} {:<16} {:<6} {:<10} {}",
        boat.id, boat.name, boat.section, boat.class, position
    )
}
