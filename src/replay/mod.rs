//! Replay time cursor and the session state driven by user actions.
mod action;
mod clock;
mod session;


pub use action::{PanDirection, ReplayAction};
pub use clock::{ClockState, DEFAULT_TICKS, ReplayClock, default_step};
pub use session::{ReplaySession, SessionSettings};
