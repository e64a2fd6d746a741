use std::collections::HashMap;

use parking_lot::Mutex;

use super::error::StorageError;
use super::slot::KeyValueSlot;

/// In-memory [`KeyValueSlot`]. Contents vanish with the process.
#[derive(Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.slots.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.slots.lock().remove(key);
        Ok(())
    }
}
