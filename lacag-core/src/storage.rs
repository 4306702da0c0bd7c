//! Persistent key/value media for the routing configuration.
//!
//! The store persists a single JSON document under a fixed key, the same way
//! a browser keeps it in `localStorage`. Media are synchronous and local.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which the routing configuration is persisted by default.
pub const DEFAULT_STORAGE_KEY: &str = "wallet_routing_config";

/// Errors reported by a [`StorageMedium`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No persistent storage exists in this execution context.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string key/value medium.
pub trait StorageMedium: Send + Sync + 'static {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    kv: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.kv.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.kv.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// Writes go to a temporary file that is then renamed over the target, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::Unavailable(format!(
                "invalid storage key {key:?}"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageMedium for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

/// A medium for contexts without persistent storage.
///
/// Reads find nothing and writes fail, so a store on top of it serves the
/// defaults and reports every mutation as a persistence failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl StorageMedium for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(
            "no persistent storage in this context".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);
        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.get_item("other").unwrap(), None);
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
        storage.set_item(DEFAULT_STORAGE_KEY, "{}").unwrap();
        assert_eq!(
            storage.get_item(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some("{}")
        );
        assert!(
            dir.path()
                .join("nested")
                .join("wallet_routing_config.json")
                .exists()
        );
        assert!(
            !dir.path()
                .join("nested")
                .join("wallet_routing_config.json.tmp")
                .exists()
        );

        // A second handle on the same directory sees the snapshot.
        let reopened = FileStorage::new(dir.path().join("nested"));
        assert_eq!(
            reopened.get_item(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn test_file_storage_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.set_item("../escape", "x").is_err());
        assert!(storage.set_item("", "x").is_err());
        assert!(storage.get_item(".hidden").is_err());
    }

    #[test]
    fn test_unavailable_storage() {
        let storage = UnavailableStorage;
        assert_eq!(storage.get_item("k").unwrap(), None);
        assert!(matches!(
            storage.set_item("k", "v"),
            Err(StorageError::Unavailable(_))
        ));
    }
}
