//! The durable key/value store.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{PersistenceError, Result};
use crate::key::StorageKey;

/// Stateless read/write facade over the storage root.
///
/// The store never caches: every `save` writes through immediately and
/// every `load` reads the file fresh. Missing or malformed data yields
/// `None` so callers can substitute their documented default — this is
/// best-effort UX state, not a source of truth for correctness.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Store rooted at the platform data directory.
    ///
    /// Falls back to a relative `.servizo` directory when the platform
    /// directories cannot be resolved (e.g. no home directory).
    pub fn open_default() -> Self {
        let root = directories::ProjectDirs::from("com", "Servizo", "Servizo")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".servizo"));
        Self::at(root)
    }

    /// Store rooted at an explicit directory. Used by tests.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Load the value stored under `key`.
    ///
    /// Returns `None` when the file is missing or does not parse; corrupt
    /// data is logged and swallowed, never surfaced.
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(key = key.name(), %err, "no stored value, using default");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key = key.name(), %err, "stored value is corrupt, using default");
                None
            }
        }
    }

    /// Write `value` under `key`.
    ///
    /// Uses an atomic write (temp file + rename) so a crash mid-save never
    /// leaves a half-written file for the next load to trip over.
    pub fn save<T: Serialize>(&self, key: StorageKey, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let json = serde_json::to_string(value).map_err(|e| PersistenceError::Serialization {
            key: key.name(),
            source: e,
        })?;

        fs::create_dir_all(&self.root).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: self.root.clone(),
            source: e,
        })?;

        let temp_path = path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(json.as_bytes())
            .map_err(|e| PersistenceError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| PersistenceError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| PersistenceError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::debug!(key = key.name(), path = %path.display(), "saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_key_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::at(dir.path());
        let value: Option<Vec<String>> = store.load(StorageKey::Shortlist);
        assert!(value.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::at(dir.path());
        let ids = vec!["1".to_string(), "7".to_string()];
        store.save(StorageKey::Shortlist, &ids).expect("save");
        let loaded: Vec<String> = store.load(StorageKey::Shortlist).expect("load");
        assert_eq!(loaded, ids);
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::at(dir.path());
        fs::create_dir_all(store.root()).expect("mkdir");
        fs::write(
            store.root().join(StorageKey::Theme.file_name()),
            "{not json",
        )
        .expect("write corrupt");
        let value: Option<String> = store.load(StorageKey::Theme);
        assert!(value.is_none());
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::at(dir.path());
        store
            .save(StorageKey::Theme, &"light".to_string())
            .expect("first save");
        store
            .save(StorageKey::Theme, &"dark".to_string())
            .expect("second save");
        let loaded: String = store.load(StorageKey::Theme).expect("load");
        assert_eq!(loaded, "dark");
        // No temp file left behind.
        let temp = store
            .root()
            .join(StorageKey::Theme.file_name())
            .with_extension("json.tmp");
        assert!(!temp.exists());
    }
}
