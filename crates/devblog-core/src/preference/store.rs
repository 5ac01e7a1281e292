//! Durable key-value storage for the persisted colour-mode flag.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
    rc::Rc,
};

use tracing::debug;

use crate::error::{CoreError, Result};

/// String key-value storage that survives the session.
///
/// Values are opaque strings; the resolver stores JSON booleans.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file, e.g. `{"darkMode": "true"}`.
///
/// A missing file reads as empty. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            CoreError::storage(format!(
                "corrupt preference file {}: {e}",
                self.path.display()
            ))
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                debug!(error = %e, "preference file unreadable, treating as empty");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();

        store.write("darkMode", "true").expect("write");
        assert_eq!(view.read("darkMode").as_deref(), Some("true"));
        assert!(view.read("other").is_none());
    }

    #[test]
    fn test_json_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = JsonFileStore::new(dir.path().join("prefs.json"));
        assert!(store.read("darkMode").is_none());
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("state").join("prefs.json");
        let store = JsonFileStore::new(&path);

        store.write("darkMode", "false").expect("write");
        store.write("lang", "\"en\"").expect("write");

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.read("darkMode").as_deref(), Some("false"));
        assert_eq!(reopened.read("lang").as_deref(), Some("\"en\""));
    }

    #[test]
    fn test_json_file_store_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").expect("write");

        let store = JsonFileStore::new(&path);
        assert!(store.read("darkMode").is_none());

        store.write("darkMode", "true").expect("write");
        assert_eq!(store.read("darkMode").as_deref(), Some("true"));
    }
}
