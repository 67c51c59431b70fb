#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Unit offset as `(east, north)`.
    #[must_use]
    pub const fn offset(self) -> (f64, f64) {
        match self {
            PanDirection::Up => (0.0, 1.0),
            PanDirection::Down => (0.0, -1.0),
            PanDirection::Left => (-1.0, 0.0),
            PanDirection::Right => (1.0, 0.0),
        }
    }
}

/// User intents applied to a [`super::ReplaySession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayAction {
    TogglePlay,
    Accelerate,
    Slow,
    SeekBackward,
    SeekForward,
    SeekStart,
    SeekEnd,
    SeekTo(f64),
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    ResetView,
    ToggleSection(usize),
    ToggleClass(usize),
}
