//! Key-value persistence medium for customization slices.
//!
//! Each storage key is an independent resource: one JSON document per
//! key, no cross-key locking, no multi-key transaction. The store layers
//! its merge/migrate logic on top of this minimal contract.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Minimal contract for a keyed persistence medium.
///
/// Implementations must treat each key independently: a failure writing
/// one key must not corrupt another.
pub trait Storage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one JSON file per key under a data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Opens storage at the platform default location.
    ///
    /// - Linux: `~/.config/SlidePromptStudio/state/`
    /// - macOS: `~/Library/Application Support/SlidePromptStudio/state/`
    /// - Windows: `%APPDATA%\SlidePromptStudio\state\`
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("SlidePromptStudio")
            .join("state");
        Self::open(dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        // Temp file + rename keeps the slice readable if the write dies midway
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove: {}", path.display()))
    }
}

/// In-memory storage for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory store pre-seeded with key/value pairs.
    #[must_use]
    pub fn seeded<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory storage lock poisoned"))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory storage lock poisoned"))?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("a"), None);
        storage.set("a", "1").unwrap();
        assert_eq!(storage.get("a"), Some("1".to_string()));
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a"), None);
        // Removing again is fine
        storage.remove("a").unwrap();
    }

    #[test]
    fn test_file_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path().join("state")).unwrap();

        storage.set("custom-palettes", "[]").unwrap();
        assert_eq!(storage.get("custom-palettes"), Some("[]".to_string()));

        storage.set("custom-palettes", "[1]").unwrap();
        assert_eq!(storage.get("custom-palettes"), Some("[1]".to_string()));

        storage.remove("custom-palettes").unwrap();
        assert_eq!(storage.get("custom-palettes"), None);
    }

    #[test]
    fn test_file_storage_keys_are_independent_files() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        storage.set("one", "1").unwrap();
        storage.set("two", "2").unwrap();
        assert!(temp_dir.path().join("one.json").exists());
        assert!(temp_dir.path().join("two.json").exists());

        storage.remove("one").unwrap();
        assert_eq!(storage.get("two"), Some("2".to_string()));
    }

    #[test]
    fn test_file_storage_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        storage.set("slice", "{}").unwrap();
        assert!(!temp_dir.path().join("slice.json.tmp").exists());
    }
}
