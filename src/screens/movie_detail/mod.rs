//! Detail screen: one movie, its reviews and its favorite flag.

mod action;
mod event;
mod handler;
mod reducer;
mod state;

pub use action::MovieDetailAction;
pub use event::MovieDetailEvent;
pub use handler::{MovieDetailConfiguration, MovieDetailHandler};
pub use reducer::MovieDetailReducer;
pub use state::MovieDetailState;
