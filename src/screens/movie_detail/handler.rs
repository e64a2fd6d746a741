use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task;

use crate::movies::MovieId;
use crate::mvi::{ActionHandler, Store, TaskScope};
use crate::network::MovieApi;
use crate::storage::FavoriteStorage;

use super::action::MovieDetailAction;
use super::event::MovieDetailEvent;
use super::reducer::MovieDetailReducer;
use super::state::MovieDetailState;

/// Collaborators and the movie the detail screen shows.
#[derive(Clone)]
pub struct MovieDetailConfiguration {
    pub movie_id: MovieId,
    pub api: Arc<dyn MovieApi>,
    pub favorites: FavoriteStorage,
}

/// Runs detail screen actions and owns the screen's [`Store`].
///
/// Network and storage work both run off the caller's thread; use
/// [`settle`](Self::settle) to wait for them. Dropping the handler aborts
/// fetches still in flight. A favorite write already handed to the
/// blocking pool still completes.
pub struct MovieDetailHandler {
    movie_id: MovieId,
    store: Store<MovieDetailState>,
    api: Arc<dyn MovieApi>,
    favorites: FavoriteStorage,
    favorite_writes: Arc<Mutex<()>>,
    tasks: TaskScope,
}

impl MovieDetailHandler {
    pub fn new(configuration: MovieDetailConfiguration, runtime: Handle) -> Self {
        Self {
            movie_id: configuration.movie_id,
            store: Store::default(),
            api: configuration.api,
            favorites: configuration.favorites,
            favorite_writes: Arc::new(Mutex::new(())),
            tasks: TaskScope::new(runtime),
        }
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    /// The screen's state container. Views subscribe here; only the
    /// handler updates it.
    pub fn store(&self) -> &Store<MovieDetailState> {
        &self.store
    }

    pub fn current_state(&self) -> MovieDetailState {
        self.store.current_state()
    }

    /// Wait for every fetch and favorite update dispatched so far.
    pub async fn settle(&self) {
        self.tasks.settle().await;
    }

    /// Abort fetches still in flight, e.g. when the screen goes away.
    pub fn cancel_all(&self) {
        self.tasks.cancel_all();
    }

    fn fetch_detail(&self) {
        let id = self.movie_id;
        let api = Arc::clone(&self.api);
        let favorites = self.favorites.clone();
        let store = self.store.clone();
        self.tasks.spawn(async move {
            let event = match api.get_movie_detail(id).await {
                Ok(movie) => {
                    let movie_id = movie.id;
                    let lookup = task::spawn_blocking(move || favorites.contains(movie_id));
                    let is_favorite = match lookup.await {
                        Ok(is_favorite) => is_favorite,
                        Err(err) => {
                            tracing::warn!(movie_id, error = %err, "favorite lookup failed");
                            false
                        }
                    };
                    MovieDetailEvent::DetailLoaded { movie, is_favorite }
                }
                Err(err) => {
                    tracing::warn!(
                        action = "fetch_detail",
                        movie_id = id,
                        kind = err.kind(),
                        error = %err,
                        "fetch failed"
                    );
                    MovieDetailEvent::FetchFailed(err)
                }
            };
            store.reduce::<MovieDetailReducer>(event);
        });
    }

    fn fetch_reviews(&self) {
        let id = self.movie_id;
        let api = Arc::clone(&self.api);
        let store = self.store.clone();
        self.tasks.spawn(async move {
            let event = match api.get_reviews(id).await {
                Ok(page) => MovieDetailEvent::ReviewsLoaded(page.results),
                Err(err) => {
                    tracing::warn!(
                        action = "fetch_reviews",
                        movie_id = id,
                        kind = err.kind(),
                        error = %err,
                        "fetch failed"
                    );
                    MovieDetailEvent::FetchFailed(err)
                }
            };
            store.reduce::<MovieDetailReducer>(event);
        });
    }

    fn toggle_favorite(&self) {
        let Some(movie) = self.store.current_state().movie else {
            tracing::warn!(movie_id = self.movie_id, "toggle favorite ignored: movie not loaded");
            return;
        };

        let favorites = self.favorites.clone();
        let store = self.store.clone();
        let writes = Arc::clone(&self.favorite_writes);
        self.tasks.spawn(async move {
            let movie_id = movie.id;
            let toggled = task::spawn_blocking(move || {
                // Held across write and reduce: state follows storage order.
                let _order = writes.lock();
                match favorites.toggle(movie.summary()) {
                    Ok(is_favorite) => {
                        tracing::debug!(movie_id, is_favorite, "favorite toggled");
                        store.reduce::<MovieDetailReducer>(MovieDetailEvent::FavoriteChanged(
                            is_favorite,
                        ));
                    }
                    Err(err) => {
                        tracing::warn!(movie_id, error = %err, "failed to persist favorite");
                    }
                }
            })
            .await;
            if let Err(err) = toggled {
                tracing::error!(movie_id, error = %err, "favorite toggle panicked");
            }
        });
    }
}

impl ActionHandler for MovieDetailHandler {
    type Action = MovieDetailAction;

    fn handle(&self, action: MovieDetailAction) {
        tracing::debug!(?action, movie_id = self.movie_id, "dispatch");
        match action {
            MovieDetailAction::FetchDetail => self.fetch_detail(),
            MovieDetailAction::FetchReviews => self.fetch_reviews(),
            MovieDetailAction::ToggleFavorite => self.toggle_favorite(),
            MovieDetailAction::ClearError => {
                self.store
                    .reduce::<MovieDetailReducer>(MovieDetailEvent::ErrorCleared);
            }
        }
    }
}
