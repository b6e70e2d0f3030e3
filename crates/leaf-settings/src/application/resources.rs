//! ResourceLocator: picks between the external resource root and the bundle.
//!
//! Users may override any bundled resource (translations, images, JSON
//! tables) by placing a file with the same relative path under the external
//! resource root configured in `general.externalRomFs`.  Lookup order:
//!
//! ```text
//! external root configured?  ──no──►  romfs:/<path>
//!          │yes
//!          ▼
//! <root>/<path> is a file?   ──no──►  romfs:/<path>
//!          │yes
//!          ▼
//!     <root>/<path>
//! ```

use leaf_core::Settings;
use serde_json::Value;

use super::storage::{Explorer, StorageError};

/// Resolves resource paths against the SD card and the resource bundle.
pub struct ResourceLocator<'a> {
    sd: &'a dyn Explorer,
    romfs: &'a dyn Explorer,
}

impl<'a> ResourceLocator<'a> {
    pub fn new(sd: &'a dyn Explorer, romfs: &'a dyn Explorer) -> Self {
        Self { sd, romfs }
    }

    /// The external override for `res_path`, if one is configured and exists.
    fn external_override(&self, settings: &Settings, res_path: &str) -> Option<String> {
        let root = settings.external_romfs()?;
        let path = format!("{root}/{res_path}");
        self.sd.is_file(&path).then_some(path)
    }

    /// Returns the absolute path to load `res_path` from.
    pub fn path_for(&self, settings: &Settings, res_path: &str) -> String {
        self.external_override(settings, res_path)
            .unwrap_or_else(|| self.romfs.make_absolute(res_path))
    }

    /// Reads the JSON resource at `res_path`, preferring the external override.
    ///
    /// # Errors
    ///
    /// Propagates the [`StorageError`] of whichever source was chosen, and
    /// returns [`StorageError::NotFound`] if the bundled file is missing.  A
    /// broken override does not fall back to the bundle.
    pub fn read_json(&self, settings: &Settings, res_path: &str) -> Result<Value, StorageError> {
        if let Some(path) = self.external_override(settings, res_path) {
            return self.sd.read_json(&path)?.ok_or(StorageError::NotFound(path));
        }

        let path = self.romfs.make_absolute(res_path);
        self.romfs.read_json(&path)?.ok_or(StorageError::NotFound(path))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
