use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Context, Line as CanvasLine, Points},
    },
};

use wakeline::scene::{BoatTrace, Scene};

use crate::ui::model::UiData;

use super::theme::{
    COURSE_RGB, MARK_RGB, PANEL_TEXT_RGB, paint_color, panel_block_style, panel_border_style,
    panel_title_style, style_color,
};

const MAX_LABEL_CHARS: usize = 12;

pub(super) fn render_map<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let title = data.scene.as_ref().map_or_else(
        || "Chart".to_owned(),
        |scene| format!("Chart (zoom x{:.2})", scene.zoom_scale),
    );
    let block = Block::default()
        .title(Span::styled(title, panel_title_style(no_color)))
        .borders(Borders::ALL)
        .border_style(panel_border_style(no_color))
        .style(panel_block_style(no_color));

    // Canvas needs at least a 2x2 drawing area inside the borders.
    let inner = block.inner(area);
    let Some(scene) = data.scene.as_ref().filter(|_| inner.width >= 2 && inner.height >= 2)
    else {
        f.render_widget(block, area);
        return;
    };

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, scene.width])
        .y_bounds([0.0, scene.height])
        .paint(|ctx| paint_scene(ctx, scene, no_color));
    f.render_widget(canvas, area);
}

fn paint_scene(ctx: &mut Context<'_>, scene: &Scene, no_color: bool) {
    let course_color = paint_color(no_color, COURSE_RGB);
    let flip = |y: f64| scene.height - y;

    for pair in scene.marks.windows(2) {
        if let [from, to] = pair {
            ctx.draw(&CanvasLine {
                x1: from.x,
                y1: flip(from.y),
                x2: to.x,
                y2: flip(to.y),
                color: course_color,
            });
        }
    }
    if scene.course_looped
        && scene.marks.len() > 2
        && let (Some(first), Some(last)) = (scene.marks.first(), scene.marks.last())
    {
        ctx.draw(&CanvasLine {
            x1: last.x,
            y1: flip(last.y),
            x2: first.x,
            y2: flip(first.y),
            color: course_color,
        });
    }
    let marks: Vec<(f64, f64)> = scene
        .marks
        .iter()
        .chain(scene.committee.as_ref())
        .map(|mark| (mark.x, flip(mark.y)))
        .collect();
    ctx.draw(&Points {
        coords: &marks,
        color: paint_color(no_color, MARK_RGB),
    });

    ctx.layer();
    for boat in &scene.boats {
        paint_boat(ctx, boat, scene.height, no_color);
    }
}

fn paint_boat(ctx: &mut Context<'_>, boat: &BoatTrace, height: f64, no_color: bool) {
    let color = paint_color(no_color, boat.color.rgb());
    for run in &boat.runs {
        for pair in run.windows(2) {
            if let [from, to] = pair {
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: height - from.y,
                    x2: to.x,
                    y2: height - to.y,
                    color,
                });
            }
        }
    }
    if boat.marker_visible
        && let Some(marker) = boat.marker.as_ref()
    {
        ctx.print(
            marker.x,
            height - marker.y,
            Span::styled(
                marker_label(boat).to_owned(),
                style_color(no_color, paint_color(no_color, PANEL_TEXT_RGB)).bg(color),
            ),
        );
    }
}

/// Boat name on the marker, or the sail id when the name would crowd the map.
pub(super) fn marker_label(boat: &BoatTrace) -> &str {
    if boat.name.is_empty() || boat.name.chars().count() > MAX_LABEL_CHARS {
        &boat.id
    } else {
        &boat.name
    }
}
