//! Host-directory backed explorer.
//!
//! `FsExplorer::sd_card("/media/sd")` serves `sdmc:/switch/x.json` from
//! `/media/sd/switch/x.json`.  Paths without a mount prefix are taken relative
//! to the root; paths on another mount, or that climb above the root with
//! `..`, are rejected.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;

use crate::application::storage::{Explorer, StorageError};

/// An [`Explorer`] over a directory of the host file system.
#[derive(Debug, Clone)]
pub struct FsExplorer {
    mount: String,
    root: PathBuf,
}

impl FsExplorer {
    pub fn new(mount: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            mount: mount.into(),
            root: root.into(),
        }
    }

    /// Explorer for the SD card (`sdmc:/`).
    pub fn sd_card(root: impl Into<PathBuf>) -> Self {
        Self::new("sdmc", root)
    }

    /// Explorer for the bundled resources (`romfs:/`).
    pub fn romfs(root: impl Into<PathBuf>) -> Self {
        Self::new("romfs", root)
    }

    /// Maps a mount path onto the host file system.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ForeignMount`] if `path` names another mount,
    /// and [`StorageError::OutsideRoot`] if it contains a `..` component.
    pub fn host_path(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = match path.split_once(":/") {
            Some((mount, rest)) if mount == self.mount => rest,
            Some((mount, _)) if !mount.contains('/') => {
                return Err(StorageError::ForeignMount {
                    path: path.to_string(),
                    mount: self.mount.clone(),
                })
            }
            _ => path,
        };

        let mut host = self.root.clone();
        for component in relative.split(['/', '\\']) {
            match component {
                "" | "." => {}
                ".." => {
                    return Err(StorageError::OutsideRoot {
                        path: path.to_string(),
                        mount: self.mount.clone(),
                    })
                }
                c => host.push(c),
            }
        }
        Ok(host)
    }

    fn io_error(path: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_string(),
            source,
        }
    }
}

impl Explorer for FsExplorer {
    fn is_file(&self, path: &str) -> bool {
        self.host_path(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn read_json(&self, path: &str) -> Result<Option<Value>, StorageError> {
        let host = self.host_path(path)?;
        let content = match std::fs::read_to_string(&host) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_error(path, e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StorageError::Json {
                path: path.to_string(),
                source,
            })
    }

    fn write_json(&self, path: &str, value: &Value) -> Result<(), StorageError> {
        let host = self.host_path(path)?;

        // Ensure directory exists before writing.
        if let Some(dir) = host.parent() {
            std::fs::create_dir_all(dir).map_err(|e| Self::io_error(path, e))?;
        }

        let content = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
            path: path.to_string(),
            source,
        })?;
        std::fs::write(&host, content).map_err(|e| Self::io_error(path, e))
    }

    fn rename_file(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let src = self.host_path(from)?;
        let dst = self.host_path(to)?;
        std::fs::rename(src, dst).map_err(|e| Self::io_error(from, e))
    }

    fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.host_path(path)?) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(Self::io_error(path, e)),
            _ => Ok(()),
        }
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
