//! Storage backends for the artifact cache: on-disk JSON files and an in-memory map.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use super::CacheError;

/// String-keyed storage seam. The cache core is generic over this so tests
/// and embedders can supply their own backend.
pub trait Store {
    /// Read the value under `key`. Missing keys are `Ok(None)`, not errors.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    /// Remove the value under `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<(), CacheError>;
    /// Enumerate every key currently present.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// One `<key>.json` file per entry under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys embed caller-supplied document ids; a path separator in an id
        // must not let the entry escape the store root.
        let safe = key.replace(['/', '\\'], "_");
        self.root.join(format!("{}.json", safe))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.root)?;
        let path = self.entry_path(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            // No directory yet means nothing was ever written.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };
        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Mutex-guarded map, for tests and in-process embedding.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::Unavailable("poisoned store lock".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::Unavailable("poisoned store lock".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::Unavailable("poisoned store lock".to_string()))?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::Unavailable("poisoned store lock".to_string()))?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
