use crate::geo::{BoundingBox, Viewport};
use crate::race::Position;
use crate::race::test_support::{approx_eq, straight_track};

use super::{MAX_STRIDE, SamplingResult, TrackSampler};

fn viewport(min: f64, max: f64) -> Viewport {
    Viewport::new(BoundingBox {
        min_lat: min,
        max_lat: max,
        min_lon: min,
        max_lon: max,
    })
}

fn times(result: &SamplingResult) -> Vec<Vec<f64>> {
    result
        .runs
        .iter()
        .map(|run| run.iter().map(|position| position.time).collect())
        .collect()
}

#[test]
fn entering_run_starts_with_connector() -> Result<(), String> {
    let track = vec![
        Position::new(0.0, 10.0, 10.0),
        Position::new(1.0, 0.0, 0.0),
        Position::new(2.0, 0.0, 0.0),
    ];
    let result = TrackSampler::default().sample(&track, 2.0, &viewport(-1.0, 1.0), 1.0);
    let runs = times(&result);
    if runs != vec![vec![0.0, 1.0, 2.0]] {
        return Err(format!("Unexpected runs {:?}", runs));
    }
    match result.marker {
        Some(marker) if approx_eq(marker.time, 2.0) => Ok(()),
        other => Err(format!("Unexpected marker {:?}", other)),
    }
}

#[test]
fn nothing_before_first_sample() -> Result<(), String> {
    let track = straight_track(20);
    let result = TrackSampler::default().sample(&track, -0.5, &viewport(0.0, 1.0), 1.0);
    if !result.is_empty() {
        return Err(format!("Expected empty result, got {:?}", result));
    }
    let empty = TrackSampler::default().sample(&[], 10.0, &viewport(0.0, 1.0), 1.0);
    if !empty.is_empty() {
        return Err("Empty track must sample to nothing".to_owned());
    }
    Ok(())
}

#[test]
fn marker_is_latest_sample_at_or_before_time() -> Result<(), String> {
    let track = straight_track(250);
    let view = viewport(0.0, 1.0);
    let sampler = TrackSampler::default();
    for zoom in [0.1, 0.5, 3.0, 12.0, 30.0] {
        for step in 0..100 {
            let current = f64::from(step) * 2.37;
            let result = sampler.sample(&track, current, &view, zoom);
            let expected = current.floor();
            let Some(marker) = result.marker else {
                return Err(format!("Missing marker at {current} zoom {zoom}"));
            };
            if !approx_eq(marker.time, expected) {
                return Err(format!(
                    "Marker at {} for time {current} zoom {zoom}",
                    marker.time
                ));
            }
            let last = result.runs.last().and_then(|run| run.last());
            if last != Some(&marker) {
                return Err(format!("Last drawn point {:?} differs from marker", last));
            }
        }
    }
    Ok(())
}

#[test]
fn runs_never_pass_current_time() -> Result<(), String> {
    let track = straight_track(120);
    let sampler = TrackSampler::default();
    for current in [0.0, 5.5, 33.3, 119.0, 500.0] {
        let result = sampler.sample(&track, current, &viewport(0.0, 1.0), 0.1);
        let late = result
            .runs
            .iter()
            .flatten()
            .find(|position| position.time > current);
        if let Some(position) = late {
            return Err(format!("Point {:?} is after {current}", position));
        }
    }
    Ok(())
}

#[test]
fn stride_is_non_increasing_in_zoom() -> Result<(), String> {
    let sampler = TrackSampler::default();
    let mut previous = usize::MAX;
    for step in 0..=400 {
        let zoom = 0.05 + f64::from(step) * 0.1;
        let stride = sampler.stride(zoom);
        if stride > previous {
            return Err(format!("Stride grew to {stride} at zoom {zoom}"));
        }
        if !(1..=MAX_STRIDE).contains(&stride) {
            return Err(format!("Stride {stride} out of range at zoom {zoom}"));
        }
        previous = stride;
    }
    if sampler.stride(0.1) != MAX_STRIDE || sampler.stride(30.0) != 1 {
        return Err("Stride endpoints do not match the zoom range".to_owned());
    }
    if sampler.stride(f64::INFINITY) != 1 || sampler.stride(f64::NAN) != MAX_STRIDE {
        return Err("Non-finite zoom must clamp".to_owned());
    }
    Ok(())
}

#[test]
fn decimates_history_but_keeps_exact_tail() -> Result<(), String> {
    let track = straight_track(100);
    let result = TrackSampler::default().sample(&track, 99.0, &viewport(0.0, 1.0), 0.1);
    let runs = times(&result);
    let mut expected: Vec<f64> = (0..8).map(|index| f64::from(index) * 10.0).collect();
    expected.extend((80..100).map(f64::from));
    if runs != vec![expected] {
        return Err(format!("Unexpected decimation {:?}", runs));
    }
    Ok(())
}

#[test]
fn short_history_is_drawn_exactly() -> Result<(), String> {
    let sampler = TrackSampler::default();
    let view = viewport(0.0, 1.0);
    for len in [1_usize, 2, 9, 15, 20] {
        let track = straight_track(len);
        let result = sampler.sample(&track, 1_000.0, &view, 0.1);
        if result.point_count() != len {
            return Err(format!(
                "Track of {len} samples with stride {} drew {} points",
                MAX_STRIDE,
                result.point_count()
            ));
        }
    }
    Ok(())
}

#[test]
fn connectors_only_at_entry_boundaries() -> Result<(), String> {
    let view = viewport(-1.0, 1.0);
    let track: Vec<Position> = (0..60)
        .map(|index| {
            let time = f64::from(index);
            let inside = (index / 7) % 2 == 0;
            let coordinate = if inside { 0.0 } else { 5.0 };
            Position::new(time, coordinate, coordinate)
        })
        .collect();
    let sampler = TrackSampler::default();
    for zoom in [0.1, 5.0, 30.0] {
        let result = sampler.sample(&track, 59.0, &view, zoom);
        for run in &result.runs {
            let mut points = run.iter();
            let Some(first) = points.next() else {
                return Err("Runs must not be empty".to_owned());
            };
            if !view.contains(first) && run.len() < 2 {
                return Err(format!("Connector without a visible point: {:?}", run));
            }
            if let Some(hidden) = points.find(|position| !view.contains(position)) {
                return Err(format!("Hidden point {:?} inside a run at zoom {zoom}", hidden));
            }
        }
    }
    Ok(())
}

#[test]
fn offscreen_boat_keeps_marker_without_runs() -> Result<(), String> {
    let track = straight_track(30);
    let result = TrackSampler::default().sample(&track, 12.0, &viewport(5.0, 6.0), 1.0);
    if !result.runs.is_empty() {
        return Err(format!("Expected no runs, got {:?}", times(&result)));
    }
    match result.marker {
        Some(marker) if approx_eq(marker.time, 12.0) => Ok(()),
        other => Err(format!("Unexpected marker {:?}", other)),
    }
}
