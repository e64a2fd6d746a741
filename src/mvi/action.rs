//! Actions dispatched by the view and the handlers that consume them.

/// Marker trait for action objects.
///
/// Actions are a closed set per screen. They carry at most an identifier
/// and are consumed exactly once by an [`ActionHandler`].
pub trait Action: Send + 'static {}

/// Maps each action of a screen to its side effect.
///
/// Results of the side effect are folded back into the screen's
/// [`Store`](super::Store); the handler is the only writer of that store.
pub trait ActionHandler {
    type Action: Action;

    /// Start the work for `action`. Never blocks the caller.
    fn handle(&self, action: Self::Action);
}
