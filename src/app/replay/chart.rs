use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use wakeline::error::{AppError, AppResult, ExportError};
use wakeline::scene::{BoatTrace, RenderBinder, Scene, SceneMark, ScenePoint};

const COURSE_COLOR: RGBColor = RGBColor(120, 130, 140);
const MARK_COLOR: RGBColor = RGBColor(230, 120, 20);
const COMMITTEE_COLOR: RGBColor = RGBColor(20, 20, 20);
const TRACK_STROKE: u32 = 2;
const MARK_RADIUS: i32 = 4;
const BOAT_RADIUS: i32 = 5;
const LEGEND_ORIGIN: (i32, i32) = (8, 8);
const LEGEND_ROW: i32 = 18;
const LEGEND_SWATCH: i32 = 12;
const LEGEND_FONT_SIZE: u32 = 14;

/// Renders scenes to a PNG file, one image per bind (the last one wins).
pub(super) struct ChartWriter {
    path: PathBuf,
}

impl ChartWriter {
    pub(super) fn new(path: &Path) -> AppResult<Self> {
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            return Err(AppError::export(ExportError::ChartExtension {
                path: path.to_path_buf(),
            }));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|err| {
                AppError::export(ExportError::CreateDir {
                    path: parent.to_path_buf(),
                    source: err,
                })
            })?;
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderBinder for ChartWriter {
    fn bind(&mut self, scene: &Scene) -> AppResult<()> {
        let size = (pixel_extent(scene.width), pixel_extent(scene.height));
        let root = BitMapBackend::new(&self.path, size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut course: Vec<(i32, i32)> = scene.marks.iter().map(mark_pixel).collect();
        if scene.course_looped
            && let Some(first) = course.first().copied()
        {
            course.push(first);
        }
        if course.len() > 1 {
            root.draw(&PathElement::new(course, COURSE_COLOR.stroke_width(1)))?;
        }
        for mark in &scene.marks {
            root.draw(&Circle::new(
                mark_pixel(mark),
                MARK_RADIUS,
                MARK_COLOR.filled(),
            ))?;
        }
        if let Some(committee) = scene.committee.as_ref() {
            let (x, y) = mark_pixel(committee);
            root.draw(&Rectangle::new(
                [
                    (x - MARK_RADIUS, y - MARK_RADIUS),
                    (x + MARK_RADIUS, y + MARK_RADIUS),
                ],
                COMMITTEE_COLOR.filled(),
            ))?;
        }

        for boat in &scene.boats {
            let (r, g, b) = boat.color.rgb();
            let color = RGBColor(r, g, b);
            for run in &boat.runs {
                let points: Vec<(i32, i32)> = run.iter().map(point_pixel).collect();
                root.draw(&PathElement::new(points, color.stroke_width(TRACK_STROKE)))?;
            }
            if boat.marker_visible
                && let Some(marker) = boat.marker.as_ref()
            {
                root.draw(&Circle::new(point_pixel(marker), BOAT_RADIUS, color.filled()))?;
                root.draw(&Circle::new(point_pixel(marker), BOAT_RADIUS, BLACK.stroke_width(1)))?;
            }
        }

        draw_legend(&root, &scene.boats)?;
        root.present()?;
        info!(path = %self.path.display(), boats = scene.boats.len(), "Wrote chart.");
        Ok(())
    }
}

/// Color swatch and name per active boat, top-left. Names are skipped with a
/// warning when no font is available; swatches are always drawn.
fn draw_legend(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    boats: &[BoatTrace],
) -> AppResult<()> {
    let (left, top) = LEGEND_ORIGIN;
    let mut labels = true;
    let mut row_top = top;
    for boat in boats {
        let (r, g, b) = boat.color.rgb();
        root.draw(&Rectangle::new(
            [(left, row_top), (left + LEGEND_SWATCH, row_top + LEGEND_SWATCH)],
            RGBColor(r, g, b).filled(),
        ))?;
        if labels {
            let style = ("sans-serif", LEGEND_FONT_SIZE).into_font().color(&BLACK);
            let label = Text::new(
                boat.name.clone(),
                (left + LEGEND_SWATCH + 6, row_top - 1),
                style,
            );
            if let Err(err) = root.draw(&label) {
                warn!("Chart legend drawn without names: {err}");
                labels = false;
            }
        }
        row_top += LEGEND_ROW;
    }
    Ok(())
}

fn pixel_extent(value: f64) -> u32 {
    if value.is_finite() && value >= 1.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

fn pixel(x: f64, y: f64) -> (i32, i32) {
    let clamp = |value: f64| value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
    (clamp(x), clamp(y))
}

fn point_pixel(point: &ScenePoint) -> (i32, i32) {
    pixel(point.x, point.y)
}

fn mark_pixel(mark: &SceneMark) -> (i32, i32) {
    pixel(mark.x, mark.y)
}
