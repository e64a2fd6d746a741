//! Persistence layer.
//!
//! A [`KeyValueSlot`] stores opaque bytes under a string key. On top of it,
//! [`ObjectCache`] keeps one typed, JSON-encoded value per key and
//! [`FavoriteStorage`] binds that cache to the favorites slot.
//!
//! # Implementations
//!
//! - [`FileSlotStore`]: one file per key, atomic writes (default)
//! - [`MemorySlotStore`]: process-local map for tests and ephemeral use

mod cache;
mod error;
mod favorites;
mod file;
mod memory;
mod slot;

pub use cache::ObjectCache;
pub use error::StorageError;
pub use favorites::{FavoriteStorage, FAVORITES_KEY};
pub use file::FileSlotStore;
pub use memory::MemorySlotStore;
pub use slot::{validate_key, KeyValueSlot};
