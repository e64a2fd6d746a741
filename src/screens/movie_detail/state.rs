use crate::movies::{Movie, Review};
use crate::mvi::UiState;
use crate::network::NetworkError;

/// Everything the detail screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDetailState {
    pub movie: Option<Movie>,
    pub review_list: Option<Vec<Review>>,
    /// Whether the shown movie is in the favorites list.
    pub is_favorite: bool,
    pub error: Option<NetworkError>,
}

impl UiState for MovieDetailState {}
