use ratatui::style::{Color, Modifier, Style};

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const SIDEBAR_WIDTH: u16 = 34;
pub(super) const STATUS_HEIGHT: u16 = 10;
pub(super) const HELP_HEIGHT: u16 = 11;
pub(super) const FILTERS_MIN_HEIGHT: u16 = 6;
pub(super) const LEGEND_MAX_HEIGHT: u16 = 12;
pub(super) const CHART_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0xd1, 0xd5, 0xdb);
pub(super) const ACCENT_PROGRESS_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const ACCENT_REPLAY_RGB: (u8, u8, u8) = (0xc0, 0x84, 0xfc);
pub(super) const ACCENT_GREEN_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(super) const ACCENT_AMBER_RGB: (u8, u8, u8) = (0xf5, 0x9e, 0x0b);
pub(super) const COURSE_RGB: (u8, u8, u8) = (0x64, 0x74, 0x8b);
pub(super) const MARK_RGB: (u8, u8, u8) = (0xff, 0xa9, 0x4d);

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

/// Foreground for canvas shapes, which take a bare color.
pub(super) const fn paint_color(no_color: bool, rgb: (u8, u8, u8)) -> Color {
    if no_color {
        Color::Reset
    } else {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn panel_block_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(CHART_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_BORDER_RGB))
    }
}

pub(super) fn panel_title_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn focused_title_style(no_color: bool) -> Style {
    style_color(no_color, rgb(ACCENT_REPLAY_RGB)).add_modifier(Modifier::BOLD)
}

pub(super) fn muted_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_MUTED_RGB))
    }
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(CHART_BG_RGB))
    }
}
