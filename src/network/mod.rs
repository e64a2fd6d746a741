//! Network collaborator: the movie database API.
//!
//! Screens depend only on the [`MovieApi`] trait. [`TmdbClient`] is the
//! production implementation over HTTP.

mod api;
mod client;
mod error;

pub use api::MovieApi;
pub use client::TmdbClient;
pub use error::NetworkError;
