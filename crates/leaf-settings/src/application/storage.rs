//! The storage port.
//!
//! An [`Explorer`] gives access to one mounted storage root.  Two of them
//! exist at runtime: the SD card (`sdmc:/`), which is writable and holds the
//! settings file and the external resource root, and the read-only resource
//! bundle shipped with the application (`romfs:/`).
//!
//! Paths handed to an explorer are strings carrying the mount prefix, e.g.
//! `sdmc:/switch/Goldleaf/settings.json`.  [`Explorer::make_absolute`] adds
//! the prefix to a path relative to the root.

use serde_json::Value;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not contain valid JSON.
    #[error("failed to parse JSON at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A file that must exist does not.
    #[error("{0} does not exist")]
    NotFound(String),

    /// The path names a different mount than the explorer serves.
    #[error("{path} is not on the {mount}:/ mount")]
    ForeignMount { path: String, mount: String },

    /// The path climbs out of the mount root with `..`.
    #[error("{path} leaves the {mount}:/ root")]
    OutsideRoot { path: String, mount: String },
}

/// File access over one mounted storage root.
#[cfg_attr(test, mockall::automock)]
pub trait Explorer: Send + Sync {
    /// Returns `true` if `path` exists and is a regular file.
    fn is_file(&self, path: &str) -> bool;

    /// Reads and parses a JSON file.  Returns `Ok(None)` if the file does not
    /// exist.
    fn read_json(&self, path: &str) -> Result<Option<Value>, StorageError>;

    /// Writes `value` as JSON, replacing any existing file and creating
    /// parent directories as needed.
    fn write_json(&self, path: &str, value: &Value) -> Result<(), StorageError>;

    /// Moves `from` to `to`, replacing `to` if it exists.
    fn rename_file(&self, from: &str, to: &str) -> Result<(), StorageError>;

    /// Deletes a file.  Deleting a file that does not exist succeeds.
    fn delete_file(&self, path: &str) -> Result<(), StorageError>;

    /// Turns a root-relative path into a mount-prefixed absolute path.
    fn make_absolute(&self, path: &str) -> String;
}
