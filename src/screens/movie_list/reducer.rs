use crate::mvi::Reducer;

use super::event::MovieListEvent;
use super::state::MovieListState;

/// Reducer for list screen state transitions.
///
/// Each event replaces only the field it owns.
pub struct MovieListReducer;

impl Reducer for MovieListReducer {
    type State = MovieListState;
    type Event = MovieListEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            MovieListEvent::TopRatedLoaded(list) => MovieListState {
                top_rated_list: Some(list),
                ..state
            },
            MovieListEvent::PopularLoaded(list) => MovieListState {
                popular_list: Some(list),
                ..state
            },
            MovieListEvent::FavoritesLoaded(list) => MovieListState {
                favorite_list: list,
                ..state
            },
            MovieListEvent::FetchFailed(error) => MovieListState {
                error: Some(error),
                ..state
            },
            MovieListEvent::ErrorCleared => MovieListState {
                error: None,
                ..state
            },
        }
    }
}
