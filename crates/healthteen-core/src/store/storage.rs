//! Key-value persistence for the two durable blobs.
//!
//! Each key maps to one JSON document. Loading never fails from the caller's
//! point of view: a missing or unreadable blob yields the seed value.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The only keys that are ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    HealthData,
    Posts,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HealthData => "healthData",
            Self::Posts => "posts",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {key}: {source}")]
    Read {
        key: StorageKey,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: StorageKey,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {key}: {source}")]
    Encode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode {key}: {source}")]
    Decode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string storage keyed by [`StorageKey`].
pub trait KeyValueStore {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: StorageKey, value: String) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            // File doesn't exist yet - first launch
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { key, source }),
        }
    }

    /// Write to a sibling temp file, then rename over the old blob.
    fn set(&mut self, key: StorageKey, value: String) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write { key, source };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)
    }
}

/// In-process storage, for tests and for inspecting what would be written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<StorageKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: StorageKey, value: impl Into<String>) -> Self {
        self.entries.insert(key, value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn set(&mut self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.entries.insert(key, value);
        Ok(())
    }
}

/// No durable storage available: nothing to read, writes go nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: StorageKey, _value: String) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Typed JSON layer over a [`KeyValueStore`].
pub struct PersistentStore {
    backend: Box<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn unavailable() -> Self {
        Self::new(Box::new(UnavailableStore))
    }

    /// Decode the blob under `key`, or fall back to `seed` when it is absent or unusable.
    pub fn load_or<T, F>(&self, key: StorageKey, seed: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.try_load(key) {
            Ok(Some(value)) => {
                tracing::info!(%key, "restored from storage");
                value
            }
            Ok(None) => {
                tracing::info!(%key, "nothing stored, using seed data");
                seed()
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "stored data unusable, using seed data");
                seed()
            }
        }
    }

    pub fn try_load<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode { key, source })
    }

    /// Serialize `value` and overwrite whatever is stored under `key`.
    pub fn save<T: Serialize>(&mut self, key: StorageKey, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|source| StorageError::Encode { key, source })?;
        self.backend.set(key, json)
    }

    /// Raw stored string, for inspection.
    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.backend.get(key).ok().flatten()
    }
}

impl fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;
    use crate::seed;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_yields_seed() {
        let store = PersistentStore::in_memory();
        let posts: Vec<Post> = store.load_or(StorageKey::Posts, seed::posts);
        assert_eq!(posts.len(), 3);
    }

    #[test]
    fn test_corrupt_blob_yields_seed() {
        let backend = MemoryStore::new().with_entry(StorageKey::Posts, "{not json");
        let store = PersistentStore::new(Box::new(backend));
        let posts: Vec<Post> = store.load_or(StorageKey::Posts, seed::posts);
        assert_eq!(posts, seed::posts());
        assert!(matches!(
            store.try_load::<Vec<Post>>(StorageKey::Posts),
            Err(StorageError::Decode { .. })
        ));
    }

    #[test]
    fn test_unavailable_discards_writes() {
        let mut store = PersistentStore::unavailable();
        let mut posts = seed::posts();
        posts[0].like_count = 999;
        store.save(StorageKey::Posts, &posts).unwrap();
        let loaded: Vec<Post> = store.load_or(StorageKey::Posts, seed::posts);
        assert_eq!(loaded[0].like_count, 23);
    }

    #[test]
    fn test_file_store_roundtrip_and_overwrite() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("nested");
        let mut store = PersistentStore::new(Box::new(FileStore::new(&data_dir)));

        let mut posts = seed::posts();
        store.save(StorageKey::Posts, &posts).unwrap();
        posts[1].toggle_like();
        store.save(StorageKey::Posts, &posts).unwrap();

        assert!(data_dir.join("posts.json").exists());
        let loaded: Vec<Post> = store.load_or(StorageKey::Posts, Vec::new);
        assert_eq!(loaded, posts);
        assert!(loaded[1].liked_by_viewer);
    }

    #[test]
    fn test_file_store_replaces_blob_without_leftovers() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set(StorageKey::HealthData, "old".into()).unwrap();
        store.set(StorageKey::HealthData, "new".into()).unwrap();

        assert_eq!(store.get(StorageKey::HealthData).unwrap().as_deref(), Some("new"));
        assert!(!dir.path().join("healthData.json.tmp").exists());
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("healthData.json")]);
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get(StorageKey::HealthData).unwrap().is_none());
        assert!(store.path_for(StorageKey::HealthData).ends_with("healthData.json"));
    }
}
