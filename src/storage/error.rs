use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by slot stores and the object cache.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the backing store.
    #[error("Invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Filesystem operation failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The value could not be serialized.
    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
