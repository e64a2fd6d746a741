use crate::mvi::Action;

/// Requests the list screen's view can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieListAction {
    FetchTopRatedMovies,
    FetchPopularMovies,
    /// Read the favorites list from local storage.
    LoadFavorites,
    /// The view has shown the current error; drop it.
    ClearError,
}

impl Action for MovieListAction {}
