//! # Snapshot Storage Backends
//!
//! A minimal key-value interface: whole string values, read, overwritten
//! or removed by key. No partial updates, no versioning.
//!
//! ## Backends
//! ```text
//! ┌───────────────────┬──────────────────────────────────────────────────┐
//! │ MemoryStorage     │ Mutex<HashMap>; tests and ephemeral sessions     │
//! │ FileStorage       │ <dir>/<key>.json, written via temp file + rename │
//! └───────────────────┴──────────────────────────────────────────────────┘
//! ```
//!
//! There is no cross-process coordination. Two sessions sharing a
//! directory race, and the last writer wins.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Local key-value storage for snapshots.
pub trait SnapshotStorage: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the stored value.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes the value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-process storage. Lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// One JSON file per key under a data directory.
///
/// ## Example
/// ```rust,ignore
/// let storage = FileStorage::new("/home/me/.local/share/storefront");
/// storage.write("cart", r#"{"items":[],"total":0}"#)?;
/// // → /home/me/.local/share/storefront/cart.json
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a file storage rooted at `dir`.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io(key, err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::io(key, err))?;

        // Rename over the old file so a crash never leaves half a snapshot.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|err| StoreError::io(key, err))?;
        fs::rename(&tmp, &path).map_err(|err| StoreError::io(key, err))?;

        debug!(key, path = %path.display(), bytes = value.len(), "Snapshot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::io(key, err)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart").unwrap(), None);

        storage.write("cart", "first").unwrap();
        storage.write("cart", "second").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("second"));

        storage.remove("cart").unwrap();
        storage.remove("cart").unwrap();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_dir_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path().join("nested").join("data"));

        assert_eq!(storage.read("wishlist").unwrap(), None);

        storage.write("wishlist", "[]").unwrap();
        storage.write("wishlist", r#"[{"id":"1"}]"#).unwrap();

        assert_eq!(
            storage.read("wishlist").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
        assert!(storage.dir().join("wishlist.json").exists());
        assert!(!storage.dir().join("wishlist.json.tmp").exists());
    }

    #[test]
    fn test_file_storage_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());

        storage.write("cart", "{}").unwrap();
        storage.remove("cart").unwrap();
        storage.remove("cart").unwrap();

        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_file_storage_rejects_path_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());

        for key in ["", "../cart", "a/b", "cart.json"] {
            assert!(matches!(
                storage.write(key, "{}"),
                Err(StoreError::InvalidKey(_))
            ));
        }
    }
}
