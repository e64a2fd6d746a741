//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod mock_tmdb;

use std::path::PathBuf;
use std::sync::Arc;

use cinebrowse::movies::{Movie, MovieId, MovieListPage, MovieSummary, Review, ReviewListPage};
use cinebrowse::storage::{FavoriteStorage, FileSlotStore, KeyValueSlot, MemorySlotStore};
use tempfile::TempDir;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Favorites backed by process memory.
pub fn memory_favorites() -> FavoriteStorage {
    FavoriteStorage::new(Arc::new(MemorySlotStore::new()))
}

/// Favorites backed by files in a fresh temp dir.
pub fn file_favorites() -> (TempDir, FavoriteStorage) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let slot: Arc<dyn KeyValueSlot> =
        Arc::new(FileSlotStore::new(temp_dir.path()).expect("Failed to open slot store"));
    (temp_dir, FavoriteStorage::new(slot))
}

pub fn summary(id: MovieId, title: &str) -> MovieSummary {
    MovieSummary::new(id, title)
}

pub fn page(movies: Vec<MovieSummary>) -> MovieListPage {
    let total = movies.len() as u32;
    MovieListPage {
        page: 1,
        results: movies,
        total_pages: 1,
        total_results: total,
    }
}

pub fn movie(id: MovieId, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("About {title}"),
        tagline: None,
        poster_path: Some(format!("/{id}.jpg")),
        backdrop_path: None,
        release_date: Some("1999-10-15".to_string()),
        runtime: Some(139),
        popularity: 61.4,
        vote_average: 8.4,
    }
}

pub fn reviews(id: MovieId, entries: &[(&str, &str)]) -> ReviewListPage {
    ReviewListPage {
        id,
        page: 1,
        results: entries
            .iter()
            .map(|(author, content)| Review {
                author: author.to_string(),
                content: content.to_string(),
            })
            .collect(),
        total_pages: 1,
        total_results: entries.len() as u32,
    }
}
