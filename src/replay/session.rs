use tracing::debug;

use crate::geo::{GeoProjector, Viewport};
use crate::race::Race;
use crate::sampling::TrackSampler;
use crate::scene::{Scene, build_scene};
use crate::selection::SelectionState;

use super::action::ReplayAction;
use super::clock::ReplayClock;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Step multiplier applied by one accelerate/slow action.
    pub speed_factor: f64,
    /// The step stays within `[base / ratio, base * ratio]`.
    pub max_speed_ratio: f64,
    /// Seek distance as a fraction of the replay window.
    pub seek_fraction: f64,
    /// Pan distance as a fraction of the visible span.
    pub pan_fraction: f64,
    pub zoom_step: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            speed_factor: 1.1,
            max_speed_ratio: 10.0,
            seek_fraction: 0.02,
            pan_fraction: 0.1,
            zoom_step: 1.25,
            width: 540,
            height: 550,
        }
    }
}

/// Mutable replay state over a loaded race: clock, viewport and selection.
///
/// Every state change goes through [`ReplaySession::apply`] or
/// [`ReplaySession::tick`]; scenes are derived from scratch on request.
#[derive(Debug, Clone)]
pub struct ReplaySession<'race> {
    race: &'race Race,
    clock: ReplayClock,
    viewport: Viewport,
    selection: SelectionState,
    sampler: TrackSampler,
    settings: SessionSettings,
    base_step: f64,
}

impl<'race> ReplaySession<'race> {
    #[must_use]
    pub fn new(
        race: &'race Race,
        viewport: Viewport,
        clock: ReplayClock,
        settings: SessionSettings,
    ) -> Self {
        Self {
            race,
            base_step: clock.step(),
            clock,
            viewport,
            selection: SelectionState::new(race),
            sampler: TrackSampler::default(),
            settings,
        }
    }

    #[must_use]
    pub const fn race(&self) -> &'race Race {
        self.race
    }

    #[must_use]
    pub const fn clock(&self) -> &ReplayClock {
        &self.clock
    }

    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub const fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    #[must_use]
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Current step relative to the configured one.
    #[must_use]
    pub fn speed_ratio(&self) -> f64 {
        self.clock.step() / self.base_step
    }

    /// Advances the clock. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    /// Applies one user action. Returns whether a redraw is needed.
    pub fn apply(&mut self, action: ReplayAction) -> bool {
        debug!(?action, "Applying replay action.");
        match action {
            ReplayAction::TogglePlay => {
                self.clock.toggle();
                true
            }
            ReplayAction::Accelerate => self.change_speed(self.settings.speed_factor),
            ReplayAction::Slow => self.change_speed(self.settings.speed_factor.recip()),
            ReplayAction::SeekBackward => self.seek_by(-self.settings.seek_fraction),
            ReplayAction::SeekForward => self.seek_by(self.settings.seek_fraction),
            ReplayAction::SeekStart => self.clock.seek(self.clock.min_time()),
            ReplayAction::SeekEnd => self.clock.seek(self.clock.max_time()),
            ReplayAction::SeekTo(time) => self.clock.seek(time),
            ReplayAction::Pan(direction) => {
                let (east, north) = direction.offset();
                self.viewport.pan(
                    east * self.settings.pan_fraction,
                    north * self.settings.pan_fraction,
                )
            }
            ReplayAction::ZoomIn => self.viewport.zoom_by(self.settings.zoom_step),
            ReplayAction::ZoomOut => self.viewport.zoom_by(self.settings.zoom_step.recip()),
            ReplayAction::ResetView => self.viewport.reset(),
            ReplayAction::ToggleSection(index) => {
                self.selection.toggle_section_at(self.race, index)
            }
            ReplayAction::ToggleClass(index) => self.selection.toggle_class_at(self.race, index),
        }
    }

    #[must_use]
    pub fn projector(&self) -> GeoProjector {
        GeoProjector::new(&self.viewport, self.settings.width, self.settings.height)
    }

    /// Scene at the clock's current time.
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene_at(self.clock.current_time())
    }

    /// Scene at an arbitrary time, without moving the clock.
    #[must_use]
    pub fn scene_at(&self, time: f64) -> Scene {
        build_scene(
            self.race,
            &self.selection,
            time,
            &self.viewport,
            &self.projector(),
            &self.sampler,
        )
    }

    fn change_speed(&mut self, factor: f64) -> bool {
        let before = self.clock.step();
        self.clock.set_speed(factor);
        let ratio = self.settings.max_speed_ratio.max(1.0);
        self.clock
            .clamp_step(self.base_step / ratio, self.base_step * ratio);
        self.clock.step().total_cmp(&before).is_ne()
    }

    fn seek_by(&mut self, fraction: f64) -> bool {
        let span = self.clock.max_time() - self.clock.min_time();
        self.clock.seek(self.clock.current_time() + span * fraction)
    }
}
