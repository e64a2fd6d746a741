use crate::movies::MovieSummary;
use crate::network::NetworkError;

/// Outcomes folded into [`MovieListState`](super::MovieListState).
#[derive(Debug, Clone)]
pub enum MovieListEvent {
    TopRatedLoaded(Vec<MovieSummary>),
    PopularLoaded(Vec<MovieSummary>),
    /// `None` when nothing has been stored yet.
    FavoritesLoaded(Option<Vec<MovieSummary>>),
    FetchFailed(NetworkError),
    ErrorCleared,
}
