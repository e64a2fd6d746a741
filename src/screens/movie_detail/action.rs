use crate::mvi::Action;

/// Requests the detail screen's view can make. The movie is fixed by the
/// screen's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieDetailAction {
    FetchDetail,
    FetchReviews,
    /// Add the loaded movie to favorites, or remove it.
    ToggleFavorite,
    /// The view has shown the current error; drop it.
    ClearError,
}

impl Action for MovieDetailAction {}
