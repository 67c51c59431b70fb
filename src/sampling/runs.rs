use crate::geo::Viewport;
use crate::race::Position;

/// Splits a stream of samples into contiguous visible runs.
///
/// Off-screen samples close the current run. The last off-screen sample before
/// a re-entry is kept as the first point of the next run so its edge starts
/// just outside the window.
pub(super) struct RunBuilder<'view> {
    viewport: &'view Viewport,
    runs: Vec<Vec<Position>>,
    current: Vec<Position>,
    last_outside: Option<Position>,
}

impl<'view> RunBuilder<'view> {
    pub(super) const fn new(viewport: &'view Viewport) -> Self {
        Self {
            viewport,
            runs: Vec::new(),
            current: Vec::new(),
            last_outside: None,
        }
    }

    pub(super) fn push(&mut self, position: Position) {
        if self.viewport.contains(&position) {
            if let Some(connector) = self.last_outside.take() {
                self.current.push(connector);
            }
            self.current.push(position);
        } else {
            self.last_outside = Some(position);
            if !self.current.is_empty() {
                self.runs.push(std::mem::take(&mut self.current));
            }
        }
    }

    pub(super) fn finish(mut self) -> Vec<Vec<Position>> {
        if !self.current.is_empty() {
            self.runs.push(self.current);
        }
        self.runs
    }
}
