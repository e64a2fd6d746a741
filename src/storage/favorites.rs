//! The favorites list, persisted in a single slot.

use std::sync::Arc;

use super::cache::ObjectCache;
use super::error::StorageError;
use super::slot::KeyValueSlot;
use crate::movies::{MovieId, MovieSummary};

/// Slot key holding the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// The user's favorite movies.
///
/// Exactly one list exists per slot store. Build one `FavoriteStorage`
/// and pass clones to whoever needs it; clones share the same lock.
#[derive(Clone)]
pub struct FavoriteStorage {
    cache: ObjectCache<Vec<MovieSummary>>,
}

impl FavoriteStorage {
    pub fn new(slot: Arc<dyn KeyValueSlot>) -> Self {
        Self {
            cache: ObjectCache::new(slot, FAVORITES_KEY),
        }
    }

    /// Stored list, or `None` if it was never set or has been removed.
    pub fn get_object(&self) -> Option<Vec<MovieSummary>> {
        self.cache.get_object()
    }

    /// Overwrite the stored list.
    pub fn set_object(&self, favorites: &[MovieSummary]) -> Result<(), StorageError> {
        self.cache.set_object(&favorites.to_vec())
    }

    /// Erase the stored list.
    pub fn remove(&self) -> Result<(), StorageError> {
        self.cache.remove()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.get_object()
            .is_some_and(|favorites| favorites.iter().any(|m| m.id == id))
    }

    /// Append `movie` unless a movie with the same id is already stored.
    /// Returns whether it was added.
    pub fn add(&self, movie: MovieSummary) -> Result<bool, StorageError> {
        self.cache.update(|stored| {
            let favorites = stored.get_or_insert_with(Vec::new);
            if favorites.iter().any(|m| m.id == movie.id) {
                return false;
            }
            favorites.push(movie);
            true
        })
    }

    /// Drop the movie with `id`. Returns whether anything was removed.
    ///
    /// An emptied list stays stored as an empty list.
    pub fn remove_movie(&self, id: MovieId) -> Result<bool, StorageError> {
        self.cache.update(|stored| match stored {
            Some(favorites) => {
                let before = favorites.len();
                favorites.retain(|m| m.id != id);
                favorites.len() != before
            }
            None => false,
        })
    }

    /// Add `movie` if absent, remove it if present. Returns the new
    /// membership.
    pub fn toggle(&self, movie: MovieSummary) -> Result<bool, StorageError> {
        self.cache.update(|stored| {
            let favorites = stored.get_or_insert_with(Vec::new);
            match favorites.iter().position(|m| m.id == movie.id) {
                Some(index) => {
                    favorites.remove(index);
                    false
                }
                None => {
                    favorites.push(movie);
                    true
                }
            }
        })
    }
}
