//! Screens of the movie browser.
//!
//! Each screen has the same shape:
//! - `state`: the snapshot the view renders
//! - `action`: what the view may ask for
//! - `event`: outcomes folded into the state
//! - `reducer`: the pure fold
//! - `handler`: runs the side effect behind each action

pub mod movie_detail;
pub mod movie_list;
