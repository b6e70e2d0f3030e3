//! SettingsService: loading and saving the settings file.
//!
//! # Load
//!
//! 1. Start from the defaults, painted with a freshly generated scheme.
//! 2. Read `sdmc:/switch/Goldleaf/settings.json`.  A missing file is an empty
//!    document, so the defaults apply unchanged.
//! 3. Overlay the document with [`merge_document`].
//!
//! # Save
//!
//! The document is written next to the settings file and then renamed over
//! it.  A crash at any point leaves either the old or the new file on disk,
//! never neither.

use std::sync::Arc;

use leaf_core::{
    flatten_settings, merge_document, DocumentError, Language, SchemeGenerator, Settings,
    SettingsDocument,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::language::LanguageResolver;
use super::resources::ResourceLocator;
use super::storage::{Explorer, StorageError};

/// Location of the settings file on the SD card.
pub const SETTINGS_FILE: &str = "sdmc:/switch/Goldleaf/settings.json";

/// Temporary file the new settings are written to before replacing
/// [`SETTINGS_FILE`].
pub const SETTINGS_TEMP_FILE: &str = "sdmc:/switch/Goldleaf/settings.json.tmp";

/// Error type for settings load and save.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Application-wide configuration context.
///
/// Owns the two storage roots, the scheme generator, and the language
/// resolver built at startup.  Wrap it in an `Arc` to share it.
pub struct SettingsService {
    sd: Arc<dyn Explorer>,
    romfs: Arc<dyn Explorer>,
    schemes: Arc<dyn SchemeGenerator>,
    language: LanguageResolver,
}

impl SettingsService {
    pub fn new(
        sd: Arc<dyn Explorer>,
        romfs: Arc<dyn Explorer>,
        schemes: Arc<dyn SchemeGenerator>,
        language: LanguageResolver,
    ) -> Self {
        Self {
            sd,
            romfs,
            schemes,
            language,
        }
    }

    /// Builds a fresh [`Settings`] from the defaults and the settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Storage`] if the file cannot be read or is not
    /// JSON, and [`SettingsError::Document`] if its content does not have the
    /// settings shape.  Colors that do not decode are skipped, not errors.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let mut settings = Settings::with_scheme(self.schemes.generate());

        let doc = match self.sd.read_json(SETTINGS_FILE)? {
            Some(value) => SettingsDocument::from_value(value)?,
            None => {
                debug!("{SETTINGS_FILE} not found, using defaults");
                SettingsDocument::default()
            }
        };
        merge_document(&mut settings, &doc);

        info!(
            custom_scheme = settings.has_custom_scheme(),
            bookmarks = settings.bookmarks().len(),
            "settings loaded"
        );
        Ok(settings)
    }

    /// Persists `settings`, atomically replacing the settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the document cannot be built or written.
    /// The previous settings file is left in place on failure.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let value = flatten_settings(settings).to_value()?;

        let written = self
            .sd
            .write_json(SETTINGS_TEMP_FILE, &value)
            .and_then(|()| self.sd.rename_file(SETTINGS_TEMP_FILE, SETTINGS_FILE));
        if let Err(e) = written {
            // A failed write may have left a partial temp file behind.
            if let Err(cleanup) = self.sd.delete_file(SETTINGS_TEMP_FILE) {
                warn!("could not remove {SETTINGS_TEMP_FILE}: {cleanup}");
            }
            return Err(e.into());
        }

        info!("settings saved to {SETTINGS_FILE}");
        Ok(())
    }

    /// Absolute path of a resource, honouring the external resource root.
    pub fn path_for_resource(&self, settings: &Settings, res_path: &str) -> String {
        self.locator().path_for(settings, res_path)
    }

    /// Reads a JSON resource, honouring the external resource root.
    ///
    /// # Errors
    ///
    /// See [`ResourceLocator::read_json`].
    pub fn read_json_resource(&self, settings: &Settings, res_path: &str) -> Result<Value, StorageError> {
        self.locator().read_json(settings, res_path)
    }

    /// The effective display language.
    pub fn language(&self, settings: &Settings) -> Language {
        self.language.resolve(settings)
    }

    fn locator(&self) -> ResourceLocator<'_> {
        ResourceLocator::new(self.sd.as_ref(), self.romfs.as_ref())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::storage::MockExplorer;
    use leaf_core::{Color, ColorScheme};
    use serde_json::json;

    struct FixedScheme(ColorScheme);

    impl SchemeGenerator for FixedScheme {
        fn generate(&self) -> ColorScheme {
            self.0
        }
    }

    fn scheme() -> ColorScheme {
        ColorScheme {
            background: Color::opaque(1, 2, 3),
            base: Color::opaque(4, 5, 6),
            base_focus: Color::opaque(7, 8, 9),
            text: Color::opaque(10, 11, 12),
        }
    }

    fn service(sd: MockExplorer) -> SettingsService {
        SettingsService::new(
            Arc::new(sd),
            Arc::new(MockExplorer::new()),
            Arc::new(FixedScheme(scheme())),
            LanguageResolver::with_default(Language::English),
        )
    }

    // ── load ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_yields_defaults() {
        // Arrange
        let mut sd = MockExplorer::new();
        sd.expect_read_json()
            .withf(|p| p == SETTINGS_FILE)
            .returning(|_| Ok(None));

        // Act
        let settings = service(sd).load().unwrap();

        // Assert
        assert_eq!(settings, Settings::with_scheme(scheme()));
    }

    #[test]
    fn test_load_overlays_document() {
        let mut sd = MockExplorer::new();
        sd.expect_read_json().returning(|_| {
            Ok(Some(json!({
                "general": { "customLanguage": "es" },
                "ui": { "menuItemSize": 100 }
            })))
        });

        let settings = service(sd).load().unwrap();

        assert_eq!(settings.custom_language, Some(Language::Spanish));
        assert_eq!(settings.menu_item_size, 100);
    }

    #[test]
    fn test_load_propagates_storage_error() {
        let mut sd = MockExplorer::new();
        sd.expect_read_json().returning(|p| {
            Err(StorageError::Io {
                path: p.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        });

        let result = service(sd).load();

        assert!(matches!(result, Err(SettingsError::Storage(StorageError::Io { .. }))));
    }

    #[test]
    fn test_load_propagates_malformed_document() {
        let mut sd = MockExplorer::new();
        sd.expect_read_json()
            .returning(|_| Ok(Some(json!({ "installs": { "copyBufferMaxSize": -1 } }))));

        let result = service(sd).load();

        assert!(matches!(
            result,
            Err(SettingsError::Document(DocumentError::Malformed(_)))
        ));
    }

    // ── save ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_writes_temp_file_then_renames() {
        // Arrange
        let mut seq = mockall::Sequence::new();
        let mut sd = MockExplorer::new();
        sd.expect_write_json()
            .withf(|p, v| p == SETTINGS_TEMP_FILE && v["ui"]["menuItemSize"] == 80)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        sd.expect_rename_file()
            .withf(|from, to| from == SETTINGS_TEMP_FILE && to == SETTINGS_FILE)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        sd.expect_delete_file().never();

        // Act
        let result = service(sd).save(&Settings::with_scheme(scheme()));

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_removes_temp_file_when_rename_fails() {
        let mut sd = MockExplorer::new();
        sd.expect_write_json().returning(|_, _| Ok(()));
        sd.expect_rename_file().returning(|from, _| {
            Err(StorageError::Io {
                path: from.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "rename failed"),
            })
        });
        sd.expect_delete_file()
            .withf(|p| p == SETTINGS_TEMP_FILE)
            .times(1)
            .returning(|_| Ok(()));

        let result = service(sd).save(&Settings::with_scheme(scheme()));

        assert!(matches!(result, Err(SettingsError::Storage(StorageError::Io { .. }))));
    }

    #[test]
    fn test_save_removes_partial_temp_file_when_write_fails() {
        // Arrange
        let mut sd = MockExplorer::new();
        sd.expect_write_json().returning(|p, _| {
            Err(StorageError::Io {
                path: p.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "card full"),
            })
        });
        sd.expect_rename_file().never();
        sd.expect_delete_file()
            .withf(|p| p == SETTINGS_TEMP_FILE)
            .times(1)
            .returning(|_| Ok(()));

        // Act
        let result = service(sd).save(&Settings::with_scheme(scheme()));

        // Assert
        assert!(matches!(result, Err(SettingsError::Storage(StorageError::Io { .. }))));
    }

    // ── delegation ────────────────────────────────────────────────────────────

    #[test]
    fn test_language_uses_resolver_default() {
        let svc = service(MockExplorer::new());
        let mut settings = Settings::with_scheme(scheme());
        assert_eq!(svc.language(&settings), Language::English);

        settings.set_custom_language(Some(Language::French));
        assert_eq!(svc.language(&settings), Language::French);
    }
}
