//! Cinebrowse: the state and persistence core of a movie-browsing client.
//!
//! The crate follows a Model-View-Intent layout:
//!
//! ```text
//! View ──Action──→ Handler ──fetch──→ MovieApi
//!  ↑                  │
//!  │               Reducer(State, Event)
//!  │                  ↓
//!  └──subscribe──── Store<State>
//! ```
//!
//! - [`mvi`]: state container, reducer and action traits, fetch task tracking
//! - [`screens`]: the movie list and movie detail screens
//! - [`network`]: the `MovieApi` collaborator and its TMDB implementation
//! - [`storage`]: key-value slots and the typed favorites cache
//! - [`config`]: TOML configuration
//! - [`logging`]: tracing initialisation

pub mod config;
pub mod logging;
pub mod movies;
pub mod mvi;
pub mod network;
pub mod screens;
pub mod storage;
