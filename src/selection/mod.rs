//! Section/class filters deciding which boats are drawn.
mod state;

#[cfg(test)]
mod tests;

pub use state::SelectionState;
