//! Core trait for movie data sources.

use async_trait::async_trait;

use super::error::NetworkError;
use crate::movies::{Movie, MovieId, MovieListPage, ReviewListPage};

/// Source of movie lists, details and reviews.
///
/// Timeouts and transport concerns belong to the implementation; callers
/// only see a success payload or a [`NetworkError`].
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// First page of currently popular movies.
    async fn get_popular_movies(&self) -> Result<MovieListPage, NetworkError>;

    /// First page of the highest rated movies.
    async fn get_top_rated_movies(&self) -> Result<MovieListPage, NetworkError>;

    /// Full record for one movie.
    async fn get_movie_detail(&self, id: MovieId) -> Result<Movie, NetworkError>;

    /// First page of reviews for one movie.
    async fn get_reviews(&self, id: MovieId) -> Result<ReviewListPage, NetworkError>;
}
