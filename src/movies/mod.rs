//! Movie domain records as served by the TMDB v3 API.

mod model;

pub use model::{Movie, MovieId, MovieListPage, MovieSummary, Review, ReviewListPage};
