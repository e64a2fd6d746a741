//! Persisted key-value slot abstraction.

use super::error::StorageError;

/// Durable storage addressed by a string key, holding opaque bytes.
///
/// Implementations must be safe to share between threads. Each call is
/// atomic on its own; read-modify-write sequences need an outer lock
/// (see [`ObjectCache`](super::ObjectCache)).
pub trait KeyValueSlot: Send + Sync {
    /// Bytes stored under `key`, or `None` if the key was never written
    /// or has been deleted.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `bytes` under `key`, replacing any previous value.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Erase `key`. Deleting an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Check that `key` is usable as a file name stem.
///
/// Keys must be non-empty ASCII alphanumerics, `-`, `_` or `.`, and must
/// not start with a dot.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let reason = if key.is_empty() {
        Some("key is empty")
    } else if key.starts_with('.') {
        Some("key starts with a dot")
    } else if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        Some("key contains characters outside [A-Za-z0-9._-]")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StorageError::InvalidKey {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_key("favorites").is_ok());
        assert!(validate_key("recent-searches_v2.list").is_ok());
    }

    #[test]
    fn rejects_unsafe_keys() {
        for key in ["", ".hidden", "../escape", "a/b", "with space", "ünïcode"] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidKey { .. })),
                "expected {key:?} to be rejected"
            );
        }
    }
}
