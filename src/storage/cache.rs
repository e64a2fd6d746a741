//! Typed single-slot cache.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::StorageError;
use super::slot::KeyValueSlot;

/// One JSON-encoded value of type `T` kept under a fixed key.
///
/// Every access goes through a lock shared by all clones, so concurrent
/// `set_object`/`remove`/`update` calls on the same cache never interleave.
/// Construct the cache once and hand out clones.
pub struct ObjectCache<T> {
    key: String,
    slot: Arc<dyn KeyValueSlot>,
    lock: Arc<Mutex<()>>,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for ObjectCache<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            slot: Arc::clone(&self.slot),
            lock: Arc::clone(&self.lock),
            _value: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> ObjectCache<T> {
    pub fn new(slot: Arc<dyn KeyValueSlot>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot,
            lock: Arc::new(Mutex::new(())),
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored value, or `None` if the slot is empty.
    ///
    /// Read and decode failures are logged and reported as `None`.
    pub fn get_object(&self) -> Option<T> {
        let _guard = self.lock.lock();
        self.load()
    }

    /// Replace the stored value with `object`.
    pub fn set_object(&self, object: &T) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        self.store(object)
    }

    /// Erase the stored value.
    pub fn remove(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        self.slot.delete(&self.key)
    }

    /// Read-modify-write under the cache lock.
    ///
    /// `f` sees the current value (`None` when empty or undecodable). If it
    /// leaves `Some`, that value is written back; if it leaves `None`, the
    /// slot is erased. A failed slot read aborts the update before `f` runs
    /// and leaves the slot untouched.
    pub fn update<R>(&self, f: impl FnOnce(&mut Option<T>) -> R) -> Result<R, StorageError> {
        let _guard = self.lock.lock();
        let mut value = self.try_load()?;
        let result = f(&mut value);
        match &value {
            Some(object) => self.store(object)?,
            None => self.slot.delete(&self.key)?,
        }
        Ok(result)
    }

    fn load(&self) -> Option<T> {
        match self.try_load() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cache read failed");
                None
            }
        }
    }

    /// Read errors propagate; an undecodable blob reads as absent.
    fn try_load(&self) -> Result<Option<T>, StorageError> {
        let Some(bytes) = self.slot.read(&self.key)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&bytes) {
            Ok(object) => Ok(Some(object)),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cached value could not be decoded");
                Ok(None)
            }
        }
    }

    fn store(&self, object: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(object).map_err(|source| StorageError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.slot.write(&self.key, &bytes)
    }
}
