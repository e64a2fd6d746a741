use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task;

use crate::mvi::{ActionHandler, Store, TaskScope};
use crate::network::MovieApi;
use crate::storage::FavoriteStorage;

use super::action::MovieListAction;
use super::event::MovieListEvent;
use super::reducer::MovieListReducer;
use super::state::MovieListState;

/// Collaborators the list screen needs.
#[derive(Clone)]
pub struct MovieListConfiguration {
    pub api: Arc<dyn MovieApi>,
    pub favorites: FavoriteStorage,
}

/// Runs list screen actions and owns the screen's [`Store`].
///
/// Fetches run on the runtime passed to [`new`](Self::new). Dropping the
/// handler aborts fetches still in flight.
pub struct MovieListHandler {
    store: Store<MovieListState>,
    api: Arc<dyn MovieApi>,
    favorites: FavoriteStorage,
    tasks: TaskScope,
}

impl MovieListHandler {
    pub fn new(configuration: MovieListConfiguration, runtime: Handle) -> Self {
        Self {
            store: Store::default(),
            api: configuration.api,
            favorites: configuration.favorites,
            tasks: TaskScope::new(runtime),
        }
    }

    /// The screen's state container. Views subscribe here; only the
    /// handler updates it.
    pub fn store(&self) -> &Store<MovieListState> {
        &self.store
    }

    pub fn current_state(&self) -> MovieListState {
        self.store.current_state()
    }

    /// Wait for every fetch and favorites read dispatched so far.
    pub async fn settle(&self) {
        self.tasks.settle().await;
    }

    /// Abort fetches still in flight, e.g. when the screen goes away.
    pub fn cancel_all(&self) {
        self.tasks.cancel_all();
    }

    fn fetch_top_rated_movies(&self) {
        let api = Arc::clone(&self.api);
        let store = self.store.clone();
        self.tasks.spawn(async move {
            let event = match api.get_top_rated_movies().await {
                Ok(page) => MovieListEvent::TopRatedLoaded(page.results),
                Err(err) => {
                    tracing::warn!(
                        action = "fetch_top_rated_movies",
                        kind = err.kind(),
                        error = %err,
                        "fetch failed"
                    );
                    MovieListEvent::FetchFailed(err)
                }
            };
            store.reduce::<MovieListReducer>(event);
        });
    }

    fn fetch_popular_movies(&self) {
        let api = Arc::clone(&self.api);
        let store = self.store.clone();
        self.tasks.spawn(async move {
            let event = match api.get_popular_movies().await {
                Ok(page) => MovieListEvent::PopularLoaded(page.results),
                Err(err) => {
                    tracing::warn!(
                        action = "fetch_popular_movies",
                        kind = err.kind(),
                        error = %err,
                        "fetch failed"
                    );
                    MovieListEvent::FetchFailed(err)
                }
            };
            store.reduce::<MovieListReducer>(event);
        });
    }

    fn load_favorites(&self) {
        let favorites = self.favorites.clone();
        let store = self.store.clone();
        self.tasks.spawn(async move {
            match task::spawn_blocking(move || favorites.get_object()).await {
                Ok(list) => {
                    store.reduce::<MovieListReducer>(MovieListEvent::FavoritesLoaded(list));
                }
                Err(err) => tracing::error!(error = %err, "favorites read panicked"),
            }
        });
    }
}

impl ActionHandler for MovieListHandler {
    type Action = MovieListAction;

    fn handle(&self, action: MovieListAction) {
        tracing::debug!(?action, "dispatch");
        match action {
            MovieListAction::FetchTopRatedMovies => self.fetch_top_rated_movies(),
            MovieListAction::FetchPopularMovies => self.fetch_popular_movies(),
            MovieListAction::LoadFavorites => self.load_favorites(),
            MovieListAction::ClearError => {
                self.store
                    .reduce::<MovieListReducer>(MovieListEvent::ErrorCleared);
            }
        }
    }
}
