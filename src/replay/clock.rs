use std::time::Duration;

use tracing::debug;

use crate::race::TimeRange;

/// Ticks needed to cross the whole window when no step is configured.
pub const DEFAULT_TICKS: f64 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Stopped { at_max: bool },
}

/// Simulated race time. The clock is the only writer of the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayClock {
    min: f64,
    max: f64,
    current: f64,
    step: f64,
    state: ClockState,
}

/// Race time advanced per tick so that `window` plays in `replay_duration`
/// of wall-clock time at a fixed `tick` period.
#[must_use]
pub fn default_step(window: TimeRange, tick: Duration, replay_duration: Duration) -> f64 {
    let replay = replay_duration.as_secs_f64();
    if replay <= 0.0 {
        return window.span() / DEFAULT_TICKS;
    }
    window.span() * tick.as_secs_f64() / replay
}

impl ReplayClock {
    /// Starts stopped at the window start. A non-positive or non-finite step
    /// falls back to a six-hundredth of the window.
    #[must_use]
    pub fn new(window: TimeRange, step: f64) -> Self {
        let min = window.min.min(window.max);
        let max = window.min.max(window.max);
        let fallback = (max - min) / DEFAULT_TICKS;
        let step = if step.is_finite() && step > 0.0 {
            step
        } else if fallback > 0.0 {
            fallback
        } else {
            1.0
        };
        Self {
            min,
            max,
            current: min,
            step,
            state: ClockState::Stopped { at_max: false },
        }
    }

    #[must_use]
    pub const fn current_time(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub const fn min_time(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max_time(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub const fn state(&self) -> ClockState {
        self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running)
    }

    /// Fraction of the window already played, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 1.0;
        }
        ((self.current - self.min) / span).clamp(0.0, 1.0)
    }

    /// Starts playback, rewinding to the window start when parked at the end.
    pub fn start(&mut self) {
        if self.current >= self.max {
            self.current = self.min;
        }
        self.state = ClockState::Running;
        debug!(time = self.current, "Replay started.");
    }

    pub fn pause(&mut self) {
        if self.is_running() {
            self.state = ClockState::Stopped { at_max: false };
            debug!(time = self.current, "Replay paused.");
        }
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advances one step while running. Returns whether the cursor moved;
    /// callers skip the redraw when it did not.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let previous = self.current;
        self.current = (self.current + self.step).min(self.max);
        if self.current >= self.max {
            self.state = ClockState::Stopped { at_max: true };
            debug!(time = self.current, "Replay reached the end.");
        }
        self.current > previous
    }

    /// Multiplies the step by `factor`. Ignored when the result would not be a
    /// positive finite step.
    pub fn set_speed(&mut self, factor: f64) -> bool {
        let step = self.step * factor;
        if !factor.is_finite() || !step.is_finite() || step <= 0.0 {
            return false;
        }
        self.step = step;
        true
    }

    pub fn clamp_step(&mut self, min_step: f64, max_step: f64) {
        if min_step.is_finite() && max_step.is_finite() && min_step > 0.0 && min_step <= max_step {
            self.step = self.step.clamp(min_step, max_step);
        }
    }

    /// Moves the cursor to `time`, clamped to the window, and stops playback.
    /// Returns whether the cursor moved or playback stopped. NaN keeps the
    /// current time.
    pub fn seek(&mut self, time: f64) -> bool {
        let was_running = self.is_running();
        let previous = self.current;
        if !time.is_nan() {
            self.current = time.clamp(self.min, self.max);
        }
        self.state = ClockState::Stopped {
            at_max: self.current >= self.max,
        };
        was_running || self.current.total_cmp(&previous).is_ne()
    }
}
