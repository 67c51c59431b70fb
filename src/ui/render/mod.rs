mod dashboard;
mod frame;
mod lifecycle;
mod map;
mod panels;
mod progress;
mod theme;

pub use dashboard::{Ui, UiActions};
pub use lifecycle::setup_render_ui;

#[cfg(test)]
mod tests;
