//! In-memory explorer for tests and demos.
//!
//! # Why an in-memory explorer?
//!
//! Tests that go through `SettingsService` want to look at exactly what was
//! written (including stray temp files) without creating directories.  Files
//! are kept as text so a test can also plant malformed JSON.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every mutating call (`write_json`,
//! `rename_file`, `delete_file`) return [`StorageError::Io`].  Reads keep
//! working so the load path can still be exercised.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::application::storage::{Explorer, StorageError};

/// An [`Explorer`] that keeps files in a map keyed by absolute path.
pub struct MemoryExplorer {
    mount: String,
    files: Mutex<BTreeMap<String, String>>,
    pub should_fail: bool,
}

impl MemoryExplorer {
    /// Creates an empty explorer serving `mount` (e.g. `"sdmc"`).
    pub fn new(mount: impl Into<String>) -> Self {
        Self {
            mount: mount.into(),
            files: Mutex::new(BTreeMap::new()),
            should_fail: false,
        }
    }

    /// Stores raw text at `path`.
    pub fn insert_text(&self, path: &str, text: impl Into<String>) {
        let key = self.make_absolute(path);
        self.files().insert(key, text.into());
    }

    /// Stores `value` as JSON text at `path`.
    pub fn insert_json(&self, path: &str, value: &Value) {
        self.insert_text(path, value.to_string());
    }

    /// Returns the raw text stored at `path`.
    pub fn contents(&self, path: &str) -> Option<String> {
        self.files().get(&self.make_absolute(path)).cloned()
    }

    /// All stored paths in sorted order.
    pub fn paths(&self) -> Vec<String> {
        self.files().keys().cloned().collect()
    }

    fn files(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self, path: &str) -> Result<(), StorageError> {
        if self.should_fail {
            return Err(StorageError::Io {
                path: path.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "memory explorer failure"),
            });
        }
        Ok(())
    }
}

impl Explorer for MemoryExplorer {
    fn is_file(&self, path: &str) -> bool {
        self.files().contains_key(&self.make_absolute(path))
    }

    fn read_json(&self, path: &str) -> Result<Option<Value>, StorageError> {
        let Some(text) = self.contents(path) else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Json {
                path: path.to_string(),
                source,
            })
    }

    fn write_json(&self, path: &str, value: &Value) -> Result<(), StorageError> {
        self.check(path)?;
        self.insert_json(path, value);
        Ok(())
    }

    fn rename_file(&self, from: &str, to: &str) -> Result<(), StorageError> {
        self.check(from)?;
        let mut files = self.files();
        let text = files
            .remove(&self.make_absolute(from))
            .ok_or_else(|| StorageError::NotFound(from.to_string()))?;
        files.insert(self.make_absolute(to), text);
        Ok(())
    }

    fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        self.check(path)?;
        self.files().remove(&self.make_absolute(path));
        Ok(())
    }

    fn make_absolute(&self, path: &str) -> String {
        let prefix = format!("{}:/", self.mount);
        if path.starts_with(&prefix) {
            return path.to_string();
        }
        format!("{prefix}{}", path.trim_start_matches('/'))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
