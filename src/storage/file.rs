//! File-backed slot store.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temporary file that
//! is renamed over the target, so readers never see a half-written value.
//! An advisory lock on `<dir>/.slots.lock` serialises writers across
//! processes sharing the directory.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::error::StorageError;
use super::slot::{validate_key, KeyValueSlot};

const LOCK_FILE: &str = ".slots.lock";

/// [`KeyValueSlot`] persisted as one file per key.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "opened slot store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn lock(&self, exclusive: bool) -> Result<File, StorageError> {
        let path = self.dir.join(LOCK_FILE);
        let io_err = |source| StorageError::Io {
            path: path.clone(),
            source,
        };
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(io_err)?;
        if exclusive {
            FileExt::lock_exclusive(&file).map_err(io_err)?;
        } else {
            FileExt::lock_shared(&file).map_err(io_err)?;
        }
        // Released when the returned handle is dropped.
        Ok(file)
    }
}

impl KeyValueSlot for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        let _lock = self.lock(false)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp_path = self.dir.join(format!(".{key}.tmp"));
        let _lock = self.lock(true)?;

        tracing::trace!(tmp_path = %tmp_path.display(), "writing to temporary file");
        let write_tmp = || -> std::io::Result<()> {
            let mut file = File::create(&tmp_path)?;
            file.write_all(bytes)?;
            file.sync_all()
        };
        write_tmp().map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;

        fs::rename(&tmp_path, &path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(key, bytes = bytes.len(), "slot written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let _lock = self.lock(true)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "slot deleted");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(dir.path()).unwrap();
        assert_eq!(store.read("favorites").unwrap(), None);
    }

    #[test]
    fn write_read_delete() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(dir.path()).unwrap();

        store.write("favorites", b"[1,2]").unwrap();
        assert_eq!(store.read("favorites").unwrap().as_deref(), Some(&b"[1,2]"[..]));
        assert!(dir.path().join("favorites.json").exists());
        assert!(!dir.path().join(".favorites.tmp").exists());

        store.delete("favorites").unwrap();
        assert_eq!(store.read("favorites").unwrap(), None);
        // Deleting twice is fine.
        store.delete("favorites").unwrap();
    }

    #[test]
    fn creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileSlotStore::new(&nested).unwrap();
        store.write("k", b"v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn rejects_path_traversal_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.write("../outside", b"x"),
            Err(StorageError::InvalidKey { .. })
        ));
    }
}
