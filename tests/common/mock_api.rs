//! Scripted in-memory `MovieApi` for handler tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use cinebrowse::movies::{Movie, MovieId, MovieListPage, ReviewListPage};
use cinebrowse::network::{MovieApi, NetworkError};
use parking_lot::Mutex;

/// A scripted reply with an optional delay before it is returned.
pub struct Reply<T> {
    pub result: Result<T, NetworkError>,
    pub delay: Duration,
}

impl<T> Reply<T> {
    pub fn ok(value: T) -> Self {
        Self {
            result: Ok(value),
            delay: Duration::ZERO,
        }
    }

    pub fn err(error: NetworkError) -> Self {
        Self {
            result: Err(error),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Replies are consumed in FIFO order per endpoint. An endpoint with no
/// scripted reply answers `NotFound`.
#[derive(Default)]
pub struct ScriptedApi {
    popular: Mutex<VecDeque<Reply<MovieListPage>>>,
    top_rated: Mutex<VecDeque<Reply<MovieListPage>>>,
    details: Mutex<HashMap<MovieId, VecDeque<Reply<Movie>>>>,
    reviews: Mutex<HashMap<MovieId, VecDeque<Reply<ReviewListPage>>>>,
    calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn popular(self, reply: Reply<MovieListPage>) -> Self {
        self.popular.lock().push_back(reply);
        self
    }

    pub fn top_rated(self, reply: Reply<MovieListPage>) -> Self {
        self.top_rated.lock().push_back(reply);
        self
    }

    pub fn detail(self, id: MovieId, reply: Reply<Movie>) -> Self {
        self.details.lock().entry(id).or_default().push_back(reply);
        self
    }

    pub fn reviews(self, id: MovieId, reply: Reply<ReviewListPage>) -> Self {
        self.reviews.lock().entry(id).or_default().push_back(reply);
        self
    }

    /// Total number of API calls made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn answer<T>(&self, reply: Option<Reply<T>>) -> Result<T, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let Some(reply) = reply else {
            return Err(NetworkError::NotFound);
        };
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }
}

#[async_trait]
impl MovieApi for ScriptedApi {
    async fn get_popular_movies(&self) -> Result<MovieListPage, NetworkError> {
        let reply = self.popular.lock().pop_front();
        self.answer(reply).await
    }

    async fn get_top_rated_movies(&self) -> Result<MovieListPage, NetworkError> {
        let reply = self.top_rated.lock().pop_front();
        self.answer(reply).await
    }

    async fn get_movie_detail(&self, id: MovieId) -> Result<Movie, NetworkError> {
        let reply = self.details.lock().get_mut(&id).and_then(VecDeque::pop_front);
        self.answer(reply).await
    }

    async fn get_reviews(&self, id: MovieId) -> Result<ReviewListPage, NetworkError> {
        let reply = self.reviews.lock().get_mut(&id).and_then(VecDeque::pop_front);
        self.answer(reply).await
    }
}
