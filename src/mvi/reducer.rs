//! Reducer trait for MVI architecture.

use super::state::UiState;

/// Reducer transforms state based on events.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Event) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The event type this reducer folds.
    type Event: Send + 'static;

    /// Fold an event into the state and return the new state.
    ///
    /// Fields the event does not own must pass through unchanged.
    fn reduce(state: Self::State, event: Self::Event) -> Self::State;
}
