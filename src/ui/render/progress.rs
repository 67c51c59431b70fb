use ratatui::prelude::text;
use ratatui::text::Span;

use super::theme::{ACCENT_PROGRESS_RGB, PANEL_TEXT_RGB, rgb, style_color};

const PARTIAL_BLOCKS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// A `[████▌   ]` bar filled to `fraction` with `label` centered on top.
pub(super) fn progress_bar_line(
    fraction: f64,
    width: u16,
    no_color: bool,
    label: &str,
) -> text::Line<'static> {
    let bar_width = usize::from(width.saturating_sub(3)).max(1);
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let total_eighths = bar_width.saturating_mul(8);
    let filled_eighths = (fraction * total_eighths as f64).floor() as usize;
    let full_count = (filled_eighths / 8).min(bar_width);
    let rem = filled_eighths % 8;
    let partial_char = PARTIAL_BLOCKS
        .get(rem)
        .and_then(|block| block.chars().next())
        .unwrap_or(' ');
    let has_partial = rem > 0 && full_count < bar_width;

    let label_chars: Vec<char> = label.chars().take(bar_width).collect();
    let label_start = bar_width.saturating_sub(label_chars.len()) / 2;

    let mut spans = Vec::with_capacity(bar_width.saturating_add(2));
    spans.push(Span::raw("["));
    for idx in 0..bar_width {
        if let Some(ch) = idx
            .checked_sub(label_start)
            .and_then(|offset| label_chars.get(offset))
        {
            spans.push(Span::styled(
                ch.to_string(),
                style_color(no_color, rgb(PANEL_TEXT_RGB)),
            ));
            continue;
        }
        if idx < full_count {
            spans.push(Span::styled(
                "█",
                style_color(no_color, rgb(ACCENT_PROGRESS_RGB)),
            ));
            continue;
        }
        if has_partial && idx == full_count {
            spans.push(Span::styled(
                partial_char.to_string(),
                style_color(no_color, rgb(ACCENT_PROGRESS_RGB)),
            ));
            continue;
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("]"));
    text::Line::from(spans)
}
