use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use wakeline::scene::BoatTrace;

use crate::ui::model::{FilterEntry, FilterFocus, PlaybackLabel, UiData};

use super::progress::progress_bar_line;
use super::theme::{
    ACCENT_AMBER_RGB, ACCENT_GREEN_RGB, ACCENT_REPLAY_RGB, LEGEND_MAX_HEIGHT, focused_title_style,
    muted_style, panel_block_style, panel_border_style, panel_title_style, rgb, style_color,
};

const KEY_HELP: [(&str, &str); 9] = [
    ("space", "play / pause"),
    ("+ / -", "faster / slower"),
    ("[ / ]", "seek back / forward"),
    ("home/end", "jump to start / end"),
    ("arrows", "pan"),
    ("z / x / 0", "zoom in / out / reset"),
    ("tab, 1-9", "filter focus, toggle"),
    ("w / p", "snapshot / png chart"),
    ("q", "quit"),
];

fn panel(title: &str, no_color: bool) -> Block<'static> {
    Block::default()
        .title(Span::styled(title.to_owned(), panel_title_style(no_color)))
        .borders(Borders::ALL)
        .border_style(panel_border_style(no_color))
        .style(panel_block_style(no_color))
}

pub(super) fn render_status<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let status = &data.status;
    let playback_color = match status.playback {
        PlaybackLabel::Playing => ACCENT_GREEN_RGB,
        PlaybackLabel::Paused => ACCENT_AMBER_RGB,
        PlaybackLabel::Finished => ACCENT_REPLAY_RGB,
    };

    let mut lines = vec![
        text::Line::from(Span::styled(status.title.clone(), muted_style(no_color))),
        text::Line::from(vec![
            Span::styled(
                status.playback.as_str(),
                style_color(no_color, rgb(playback_color)),
            ),
            Span::raw(format!("  {} / {}", status.elapsed, status.total)),
        ]),
        progress_bar_line(
            status.progress,
            area.width.saturating_sub(2),
            no_color,
            &format!("{:.0}%", status.progress * 100.0),
        ),
        text::Line::from(format!(
            "Speed x{:.2}   Zoom x{:.2}",
            status.speed_ratio, status.zoom_scale
        )),
        text::Line::from(format!(
            "Boats {} / {}",
            status.shown_boats, status.total_boats
        )),
    ];
    if let Some(message) = data.message.as_deref() {
        lines.push(text::Line::from(Span::styled(
            message.to_owned(),
            style_color(no_color, rgb(ACCENT_AMBER_RGB)),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel("Replay", no_color))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub(super) fn render_filters<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let mut lines = Vec::with_capacity(
        data.sections
            .len()
            .saturating_add(data.classes.len())
            .saturating_add(3),
    );
    lines.push(filter_heading(
        "Sections",
        data.focus == FilterFocus::Sections,
        no_color,
    ));
    lines.extend(filter_lines(&data.sections));
    lines.push(text::Line::from(""));
    lines.push(filter_heading(
        "Classes",
        data.focus == FilterFocus::Classes,
        no_color,
    ));
    lines.extend(filter_lines(&data.classes));

    let paragraph = Paragraph::new(lines).block(panel("Filters", no_color));
    f.render_widget(paragraph, area);
}

fn filter_heading(label: &'static str, focused: bool, no_color: bool) -> text::Line<'static> {
    if focused {
        text::Line::from(Span::styled(
            format!("> {label}"),
            focused_title_style(no_color),
        ))
    } else {
        text::Line::from(Span::styled(format!("  {label}"), muted_style(no_color)))
    }
}

fn filter_lines(entries: &[FilterEntry]) -> impl Iterator<Item = text::Line<'static>> + '_ {
    entries.iter().enumerate().map(|(idx, entry)| {
        let mark = if entry.checked { "x" } else { " " };
        let key = if idx < 9 {
            idx.saturating_add(1).to_string()
        } else {
            " ".to_owned()
        };
        text::Line::from(format!("  {key} [{mark}] {}", entry.label))
    })
}

/// Rows the boat legend wants: one per active boat plus borders.
pub(super) fn legend_height(data: &UiData) -> u16 {
    let boats = data.scene.as_ref().map_or(1, |scene| scene.boats.len().max(1));
    u16::try_from(boats)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(LEGEND_MAX_HEIGHT)
}

pub(super) fn render_legend<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let lines: Vec<text::Line<'static>> = match data.scene.as_ref() {
        Some(scene) if !scene.boats.is_empty() => scene
            .boats
            .iter()
            .map(|boat| legend_line(boat, no_color))
            .collect(),
        Some(_) => vec![text::Line::from(Span::styled(
            "No boat selected",
            muted_style(no_color),
        ))],
        None => vec![text::Line::from(Span::styled(
            "Waiting for data",
            muted_style(no_color),
        ))],
    };
    let paragraph = Paragraph::new(lines).block(panel("Boats", no_color));
    f.render_widget(paragraph, area);
}

fn legend_line(boat: &BoatTrace, no_color: bool) -> text::Line<'static> {
    let swatch = if no_color {
        Span::raw("##")
    } else {
        Span::styled("██", style_color(no_color, rgb(boat.color.rgb())))
    };
    text::Line::from(vec![
        swatch,
        Span::raw(format!(" {}", boat.name)),
        Span::styled(format!("  {}", boat.id), muted_style(no_color)),
    ])
}

pub(super) fn render_help<B: Backend>(f: &mut Frame<'_, B>, data: &UiData, area: Rect) {
    let no_color = data.no_color;
    let lines: Vec<text::Line<'static>> = KEY_HELP
        .iter()
        .map(|(keys, action)| {
            text::Line::from(vec![
                Span::styled(format!("{keys:<10}"), muted_style(no_color)),
                Span::raw(*action),
            ])
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(panel("Keys", no_color));
    f.render_widget(paragraph, area);
}
