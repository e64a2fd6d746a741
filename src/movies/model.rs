use serde::{Deserialize, Serialize};

/// TMDB movie identifier.
pub type MovieId = u64;

/// A movie as it appears in list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
}

impl MovieSummary {
    /// Minimal summary, mostly useful for fixtures.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            popularity: 0.0,
            vote_average: 0.0,
        }
    }
}

/// Full movie record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Project onto the list representation stored in favorites.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            overview: self.overview.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            release_date: self.release_date.clone(),
            popularity: self.popularity,
            vote_average: self.vote_average,
        }
    }

    /// Popularity scaled for display (TMDB reports it unbounded; the
    /// detail view shows it as a percentage of 100).
    pub fn popularity_percent(&self) -> f64 {
        self.popularity / 100.0
    }
}

/// A user review of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub content: String,
}

/// One page of a movie list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieListPage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// One page of the reviews endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewListPage {
    #[serde(default)]
    pub id: MovieId,
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Review>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}
