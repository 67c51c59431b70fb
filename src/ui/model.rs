use wakeline::scene::Scene;

/// Which filter list the digit keys toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterFocus {
    #[default]
    Sections,
    Classes,
}

impl FilterFocus {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            FilterFocus::Sections => FilterFocus::Classes,
            FilterFocus::Classes => FilterFocus::Sections,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackLabel {
    #[default]
    Paused,
    Playing,
    Finished,
}

impl PlaybackLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlaybackLabel::Paused => "Paused",
            PlaybackLabel::Playing => "Playing",
            PlaybackLabel::Finished => "Finished",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReplayStatus {
    pub title: String,
    pub elapsed: String,
    pub total: String,
    /// Position of the clock in the replay window, `0.0..=1.0`.
    pub progress: f64,
    pub playback: PlaybackLabel,
    pub speed_ratio: f64,
    pub zoom_scale: f64,
    pub shown_boats: usize,
    pub total_boats: usize,
}

/// Everything one dashboard frame needs.
#[derive(Debug, Clone, Default)]
pub struct UiData {
    pub scene: Option<Scene>,
    pub status: ReplayStatus,
    pub sections: Vec<FilterEntry>,
    pub classes: Vec<FilterEntry>,
    pub focus: FilterFocus,
    pub message: Option<String>,
    pub no_color: bool,
}
