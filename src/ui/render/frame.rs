use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::{Backend, Frame},
    widgets::Block,
};

use crate::ui::model::UiData;

use super::map::render_map;
use super::panels::{legend_height, render_filters, render_help, render_legend, render_status};
use super::theme::{
    FILTERS_MIN_HEIGHT, HELP_HEIGHT, SIDEBAR_WIDTH, STATUS_HEIGHT, UI_MARGIN,
    app_background_style,
};

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiData) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.no_color)),
        size,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(UI_MARGIN)
        .constraints([Constraint::Min(1), Constraint::Length(SIDEBAR_WIDTH)])
        .split(size);

    let (map_chunk, sidebar_chunk) = match columns.as_ref() {
        [a, b] => (a, b),
        _ => return,
    };

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(FILTERS_MIN_HEIGHT),
            Constraint::Length(legend_height(data)),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(*sidebar_chunk);

    let (status_chunk, filters_chunk, legend_chunk, help_chunk) = match sidebar.as_ref() {
        [a, b, c, d] => (a, b, c, d),
        _ => return,
    };

    render_map(f, data, *map_chunk);
    render_status(f, data, *status_chunk);
    render_filters(f, data, *filters_chunk);
    render_legend(f, data, *legend_chunk);
    render_help(f, data, *help_chunk);
}
