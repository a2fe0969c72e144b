//! Durable string-keyed storage.
//!
//! The persistence layer only assumes a local key-value store: one string
//! key holds one serialized document, reading a missing key yields nothing,
//! and writing replaces the key atomically from the caller's perspective.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An abstract durable store for string-keyed documents.
///
/// This decouples the scenario persistence layer from the concrete storage
/// mechanism (filesystem, browser-local storage behind FFI, in-memory for
/// tests). All operations are synchronous; there is no transactionality
/// beyond single-key replacement.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: key present
    /// - `Ok(None)`: key absent
    /// - `Err(_)`: the store could not be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. No-op if absent.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Filesystem-backed key-value store, one file per key.
///
/// Layout:
/// ```text
/// base_dir/
/// ├── scenarios.json
/// └── <other-key>.json
/// ```
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).context("Failed to create storage directory")?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location (~/.chatmock).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or if
    /// the directory cannot be created.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Self::new(home_dir.join(".chatmock"))
    }

    fn key_file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.key_file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&file_path)
            .context(format!("Failed to read storage file: {:?}", file_path))?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let file_path = self.key_file_path(key);
        fs::write(&file_path, value)
            .context(format!("Failed to write storage file: {:?}", file_path))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let file_path = self.key_file_path(key);
        if file_path.exists() {
            fs::remove_file(&file_path)
                .context(format!("Failed to delete storage file: {:?}", file_path))?;
        }
        Ok(())
    }
}

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, for tests exercising startup loads.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp_dir.path()).unwrap();

        store.set("scenarios", r#"{"scenarios":[]}"#).unwrap();

        assert_eq!(
            store.get("scenarios").unwrap(),
            Some(r#"{"scenarios":[]}"#.to_string())
        );
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path()).unwrap();
        assert_eq!(store.get("never-written").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp_dir.path()).unwrap();

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();

        assert_eq!(store.get("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_file_store_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp_dir.path()).unwrap();

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();

        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
