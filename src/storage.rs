// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted key/value storage for client-side state.
//!
//! The session credential, cached user profile, and theme preference all
//! live in a small string-keyed store. The store is injected into the
//! gateway and auth client rather than looked up ambiently, so tests can
//! run against an in-memory backend.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// String-keyed storage for persisted client state.
///
/// Operations are best-effort, like the browser storage they stand in for:
/// backends log and swallow I/O failures rather than surfacing them to
/// callers, and a missing key reads as `None`.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// In-memory storage backend (testing, or sessions that should not persist).
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

/// File-backed storage: one JSON object per store, rewritten on every write.
///
/// The file holds a flat `{"key": "value"}` map. Writes rewrite the whole
/// document; the stored state is a handful of short strings, so there is no
/// need for anything finer-grained.
pub struct FileStorage {
    path: PathBuf,
    // Cached view of the file, kept in sync with what was last written.
    values: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) a file-backed store at `path`.
    ///
    /// An unreadable or malformed file starts the store empty; the next
    /// write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Malformed storage file, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn flush(&self, values: &HashMap<String, String>) {
        let raw = match serde_json::to_string_pretty(values) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize storage");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to create storage directory");
                return;
            }
        }

        if let Err(e) = std::fs::write(&self.path, raw) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to write storage file");
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), value.to_string());
        self.flush(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.lock().unwrap();
        if values.remove(key).is_some() {
            self.flush(&values);
        }
    }
}
