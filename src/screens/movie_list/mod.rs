//! List screen: popular, top rated and favorite movies.

mod action;
mod event;
mod handler;
mod reducer;
mod state;

pub use action::MovieListAction;
pub use event::MovieListEvent;
pub use handler::{MovieListConfiguration, MovieListHandler};
pub use reducer::MovieListReducer;
pub use state::MovieListState;
