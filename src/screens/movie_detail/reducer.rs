use crate::mvi::Reducer;

use super::event::MovieDetailEvent;
use super::state::MovieDetailState;

/// Reducer for detail screen state transitions.
pub struct MovieDetailReducer;

impl Reducer for MovieDetailReducer {
    type State = MovieDetailState;
    type Event = MovieDetailEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            MovieDetailEvent::DetailLoaded { movie, is_favorite } => MovieDetailState {
                movie: Some(movie),
                is_favorite,
                ..state
            },
            MovieDetailEvent::ReviewsLoaded(reviews) => MovieDetailState {
                review_list: Some(reviews),
                ..state
            },
            MovieDetailEvent::FavoriteChanged(is_favorite) => MovieDetailState {
                is_favorite,
                ..state
            },
            MovieDetailEvent::FetchFailed(error) => MovieDetailState {
                error: Some(error),
                ..state
            },
            MovieDetailEvent::ErrorCleared => MovieDetailState {
                error: None,
                ..state
            },
        }
    }
}
