use crate::movies::MovieSummary;
use crate::mvi::UiState;
use crate::network::NetworkError;

/// Everything the list screen renders.
///
/// Fields are independent: a list may be present next to an error from a
/// later failed fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieListState {
    pub top_rated_list: Option<Vec<MovieSummary>>,
    pub popular_list: Option<Vec<MovieSummary>>,
    pub favorite_list: Option<Vec<MovieSummary>>,
    /// Last fetch failure. Kept until overwritten or cleared with
    /// [`MovieListAction::ClearError`](super::MovieListAction::ClearError).
    pub error: Option<NetworkError>,
}

impl UiState for MovieListState {}
