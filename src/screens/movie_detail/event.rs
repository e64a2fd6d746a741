use crate::movies::{Movie, Review};
use crate::network::NetworkError;

/// Outcomes folded into [`MovieDetailState`](super::MovieDetailState).
#[derive(Debug, Clone)]
pub enum MovieDetailEvent {
    DetailLoaded { movie: Movie, is_favorite: bool },
    ReviewsLoaded(Vec<Review>),
    FavoriteChanged(bool),
    FetchFailed(NetworkError),
    ErrorCleared,
}
