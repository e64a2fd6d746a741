//! Model-View-Intent primitives shared by every screen.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Handler ──→ Event ──→ Reducer ──→ Store<State> ──→ View
//!    ↑                                                          │
//!    └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a screen, replaced whole on every update
//! - **Action**: request from the view, consumed once by the handler
//! - **Reducer**: pure fold of an event (fetch outcome) into the state
//! - **Store**: the single owner of the current state; broadcasts every change

mod action;
mod reducer;
mod state;
mod store;
mod tasks;

pub use action::{Action, ActionHandler};
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
pub use tasks::TaskScope;
