//! Mapping between [`Settings`] and the JSON settings document.
//!
//! # Two directions
//!
//! - [`merge_document`] overlays a (possibly sparse) [`SettingsDocument`] onto
//!   an existing [`Settings`] value.  A key that is absent, `null`, or an empty
//!   string leaves the current value alone.
//! - [`flatten_settings`] produces the document for a [`Settings`] value.
//!   Optional values are written only when set; plain values are always
//!   written.
//!
//! # Typed mirror (for beginners)
//!
//! Rather than poking at an untyped `serde_json::Value`, the document is
//! deserialised into plain structs whose fields are all `Option`s.  serde does
//! the type checking: a key holding the wrong JSON type (say, a string for
//! `menuItemSize`) fails the whole parse with [`DocumentError::Malformed`],
//! while keys the structs do not know about are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::color::{Color, SchemeSlot};
use crate::domain::language::Language;
use crate::domain::settings::{Settings, WebBookmark};

/// Error type for document conversion.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The JSON does not have the shape of a settings document.
    #[error("settings document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ── Document schema types ─────────────────────────────────────────────────────

/// Top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<GeneralSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installs: Option<InstallsSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralSection {
    #[serde(rename = "customLanguage", default, skip_serializing_if = "Option::is_none")]
    pub custom_language: Option<String>,
    #[serde(rename = "externalRomFs", default, skip_serializing_if = "Option::is_none")]
    pub external_romfs: Option<String>,
    #[serde(rename = "use12hTime", default, skip_serializing_if = "Option::is_none")]
    pub use_12h_time: Option<bool>,
    #[serde(rename = "ignoreHiddenFiles", default, skip_serializing_if = "Option::is_none")]
    pub ignore_hidden_files: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_bar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_bar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallsSection {
    #[serde(rename = "ignoreRequiredFwVersion", default, skip_serializing_if = "Option::is_none")]
    pub ignore_required_fw_version: Option<bool>,
    #[serde(
        rename = "showDeletionPromptAfterInstall",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub show_deletion_prompt_after_install: Option<bool>,
    #[serde(rename = "copyBufferMaxSize", default, skip_serializing_if = "Option::is_none")]
    pub copy_buffer_max_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportSection {
    #[serde(rename = "decryptBufferMaxSize", default, skip_serializing_if = "Option::is_none")]
    pub decrypt_buffer_max_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<Vec<BookmarkEntry>>,
}

/// One bookmark as stored on disk.  Missing keys read as empty strings so the
/// entry can be validated (and dropped) instead of failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl SettingsDocument {
    /// Interprets a parsed JSON value as a settings document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] if `value` is not an object or a
    /// known key has the wrong JSON type.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Converts the document into a JSON value ready to be written.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] if serialisation fails.
    pub fn to_value(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::to_value(self)?)
    }
}

// ── Document → Settings ───────────────────────────────────────────────────────

/// Overlays every present, non-empty key of `doc` onto `settings`.
///
/// - `customLanguage` codes without a translation select English.
/// - `externalRomFs` is normalized onto the SD card.
/// - Each of `background`, `base`, `baseFocus`, `text` replaces one slot of the
///   current scheme and makes it custom; the other slots keep their colors.
/// - A color that does not decode is logged and treated as absent.
/// - Bookmarks with an empty name or URL are skipped.
pub fn merge_document(settings: &mut Settings, doc: &SettingsDocument) {
    if let Some(general) = &doc.general {
        if let Some(code) = non_empty(&general.custom_language) {
            let lang = Language::from_code(code).unwrap_or_else(|| {
                warn!("unknown custom language {code:?}, using English");
                Language::English
            });
            settings.set_custom_language(Some(lang));
        }
        if let Some(path) = non_empty(&general.external_romfs) {
            settings.set_external_romfs(Some(path));
        }
        if let Some(v) = general.use_12h_time {
            settings.use_12h_time = v;
        }
        if let Some(v) = general.ignore_hidden_files {
            settings.ignore_hidden_files = v;
        }
    }

    if let Some(ui) = &doc.ui {
        let slots = [
            ("background", &ui.background, SchemeSlot::Background),
            ("base", &ui.base, SchemeSlot::Base),
            ("baseFocus", &ui.base_focus, SchemeSlot::BaseFocus),
            ("text", &ui.text, SchemeSlot::Text),
        ];
        for (key, value, slot) in slots {
            if let Some(color) = decode_color(key, value) {
                settings.set_scheme_color(slot, color);
            }
        }
        if let Some(size) = ui.menu_item_size {
            settings.menu_item_size = size;
        }
        if let Some(color) = decode_color("scrollBar", &ui.scroll_bar) {
            settings.scrollbar_color = Some(color);
        }
        if let Some(color) = decode_color("progressBar", &ui.progress_bar) {
            settings.progress_bar_color = Some(color);
        }
    }

    if let Some(installs) = &doc.installs {
        if let Some(v) = installs.ignore_required_fw_version {
            settings.ignore_required_fw_version = v;
        }
        if let Some(v) = installs.show_deletion_prompt_after_install {
            settings.show_deletion_prompt_after_install = v;
        }
        if let Some(v) = installs.copy_buffer_max_size {
            settings.copy_buffer_max_size = v;
        }
    }

    if let Some(v) = doc.export.as_ref().and_then(|e| e.decrypt_buffer_max_size) {
        settings.decrypt_buffer_max_size = v;
    }

    let entries = doc.web.as_ref().and_then(|w| w.bookmarks.as_deref());
    for (i, entry) in entries.unwrap_or_default().iter().enumerate() {
        let bookmark = WebBookmark {
            name: entry.name.clone(),
            url: entry.url.clone(),
        };
        if let Err(e) = settings.add_bookmark(bookmark) {
            debug!("skipping bookmark #{i}: {e}");
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn decode_color(key: &str, value: &Option<String>) -> Option<Color> {
    let hex = non_empty(value)?;
    match Color::from_hex(hex) {
        Ok(color) => Some(color),
        Err(e) => {
            warn!("ignoring `{key}` color {hex:?}: {e}");
            None
        }
    }
}

// ── Settings → Document ───────────────────────────────────────────────────────

/// Builds the document that persists `settings`.
///
/// Unset optional values are omitted; a generated scheme is never written.
pub fn flatten_settings(settings: &Settings) -> SettingsDocument {
    let custom_colors = settings
        .has_custom_scheme()
        .then(|| *settings.color_scheme());

    SettingsDocument {
        general: Some(GeneralSection {
            custom_language: settings.custom_language.map(|l| l.code().to_string()),
            external_romfs: settings.external_romfs().map(str::to_string),
            use_12h_time: Some(settings.use_12h_time),
            ignore_hidden_files: Some(settings.ignore_hidden_files),
        }),
        ui: Some(UiSection {
            background: custom_colors.map(|c| c.background.to_hex()),
            base: custom_colors.map(|c| c.base.to_hex()),
            base_focus: custom_colors.map(|c| c.base_focus.to_hex()),
            text: custom_colors.map(|c| c.text.to_hex()),
            menu_item_size: Some(settings.menu_item_size),
            scroll_bar: settings.scrollbar_color.map(|c| c.to_hex()),
            progress_bar: settings.progress_bar_color.map(|c| c.to_hex()),
        }),
        installs: Some(InstallsSection {
            ignore_required_fw_version: Some(settings.ignore_required_fw_version),
            show_deletion_prompt_after_install: Some(settings.show_deletion_prompt_after_install),
            copy_buffer_max_size: Some(settings.copy_buffer_max_size),
        }),
        export: Some(ExportSection {
            decrypt_buffer_max_size: Some(settings.decrypt_buffer_max_size),
        }),
        web: Some(WebSection {
            bookmarks: Some(
                settings
                    .bookmarks()
                    .iter()
                    .map(|b| BookmarkEntry {
                        name: b.name.clone(),
                        url: b.url.clone(),
                    })
                    .collect(),
            ),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::ColorScheme;
    use serde_json::json;

    fn generated() -> ColorScheme {
        ColorScheme {
            background: Color::opaque(1, 1, 1),
            base: Color::opaque(2, 2, 2),
            base_focus: Color::opaque(3, 3, 3),
            text: Color::opaque(4, 4, 4),
        }
    }

    fn merged(value: Value) -> Result<Settings, DocumentError> {
        let doc = SettingsDocument::from_value(value)?;
        let mut settings = Settings::with_scheme(generated());
        merge_document(&mut settings, &doc);
        Ok(settings)
    }

    // ── Merge ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_document_leaves_defaults() {
        let settings = merged(json!({})).unwrap();
        assert_eq!(settings, Settings::with_scheme(generated()));
    }

    #[test]
    fn test_empty_sections_leave_defaults() {
        let settings = merged(json!({
            "general": {}, "ui": {}, "installs": {}, "export": {}, "web": {}
        }))
        .unwrap();
        assert_eq!(settings, Settings::with_scheme(generated()));
    }

    #[test]
    fn test_empty_strings_leave_defaults() {
        // Arrange / Act
        let settings = merged(json!({
            "general": { "customLanguage": "", "externalRomFs": "" },
            "ui": { "background": "", "scrollBar": "", "progressBar": "" }
        }))
        .unwrap();

        // Assert
        assert_eq!(settings.custom_language, None);
        assert_eq!(settings.external_romfs(), None);
        assert!(!settings.has_custom_scheme());
        assert_eq!(settings.scrollbar_color, None);
        assert_eq!(settings.progress_bar_color, None);
    }

    #[test]
    fn test_general_section_overrides() {
        let settings = merged(json!({
            "general": {
                "customLanguage": "de",
                "externalRomFs": "ext",
                "use12hTime": true,
                "ignoreHiddenFiles": true
            }
        }))
        .unwrap();

        assert_eq!(settings.custom_language, Some(Language::German));
        assert_eq!(settings.external_romfs(), Some("sdmc:/ext"));
        assert!(settings.use_12h_time);
        assert!(settings.ignore_hidden_files);
    }

    #[test]
    fn test_unknown_language_code_selects_english() {
        let settings = merged(json!({ "general": { "customLanguage": "tlh" } })).unwrap();
        assert_eq!(settings.custom_language, Some(Language::English));
    }

    #[test]
    fn test_partial_scheme_override_keeps_generated_slots() {
        // Arrange / Act
        let settings = merged(json!({ "ui": { "background": "#AABBCCDD" } })).unwrap();

        // Assert
        assert!(settings.has_custom_scheme());
        let colors = settings.color_scheme();
        assert_eq!(colors.background, Color::new(0xAA, 0xBB, 0xCC, 0xDD));
        assert_eq!(colors.base, generated().base);
        assert_eq!(colors.base_focus, generated().base_focus);
        assert_eq!(colors.text, generated().text);
    }

    #[test]
    fn test_ui_section_overrides_size_and_bar_colors() {
        let settings = merged(json!({
            "ui": { "menuItemSize": 60, "scrollBar": "#010203FF", "progressBar": "#0A0B0C0D" }
        }))
        .unwrap();

        assert_eq!(settings.menu_item_size, 60);
        assert_eq!(settings.scrollbar_color, Some(Color::new(1, 2, 3, 0xFF)));
        assert_eq!(settings.progress_bar_color, Some(Color::new(0x0A, 0x0B, 0x0C, 0x0D)));
        assert!(!settings.has_custom_scheme());
    }

    #[test]
    fn test_invalid_color_is_ignored_and_other_keys_still_load() {
        // Arrange / Act
        let settings = merged(json!({
            "general": { "customLanguage": "de" },
            "ui": { "scrollBar": "#12345", "baseFocus": "#nothex!", "menuItemSize": 64 },
            "web": { "bookmarks": [ { "name": "Docs", "url": "https://docs.example" } ] }
        }))
        .unwrap();

        // Assert
        assert_eq!(settings.scrollbar_color, None);
        assert!(!settings.has_custom_scheme());
        assert_eq!(settings.color_scheme().base_focus, generated().base_focus);
        assert_eq!(settings.custom_language, Some(Language::German));
        assert_eq!(settings.menu_item_size, 64);
        assert_eq!(
            settings.bookmarks(),
            [WebBookmark::new("Docs", "https://docs.example").unwrap()]
        );
    }

    #[test]
    fn test_installs_and_export_sections_override() {
        let settings = merged(json!({
            "installs": {
                "ignoreRequiredFwVersion": false,
                "showDeletionPromptAfterInstall": true,
                "copyBufferMaxSize": 1024
            },
            "export": { "decryptBufferMaxSize": 2048 }
        }))
        .unwrap();

        assert!(!settings.ignore_required_fw_version);
        assert!(settings.show_deletion_prompt_after_install);
        assert_eq!(settings.copy_buffer_max_size, 1024);
        assert_eq!(settings.decrypt_buffer_max_size, 2048);
    }

    #[test]
    fn test_decrypt_buffer_size_is_read_from_export_section() {
        // A value under `installs` is not where the writer puts it.
        let settings = merged(json!({ "installs": { "decryptBufferMaxSize": 2048 } })).unwrap();
        assert_eq!(settings.decrypt_buffer_max_size, 16 * 1024 * 1024);
    }

    #[test]
    fn test_bookmarks_with_empty_fields_are_dropped() {
        // Arrange / Act
        let settings = merged(json!({
            "web": { "bookmarks": [
                { "name": "A", "url": "" },
                { "name": "B", "url": "http://x" },
                { "url": "http://no-name" },
                { "name": "", "url": "http://y" }
            ] }
        }))
        .unwrap();

        // Assert
        assert_eq!(
            settings.bookmarks(),
            [WebBookmark::new("B", "http://x").unwrap()]
        );
    }

    #[test]
    fn test_wrong_value_type_is_malformed() {
        let result = merged(json!({ "ui": { "menuItemSize": "big" } }));
        assert!(matches!(result, Err(DocumentError::Malformed(_))));
    }

    #[test]
    fn test_non_object_root_is_malformed() {
        let result = SettingsDocument::from_value(json!([1, 2, 3]));
        assert!(matches!(result, Err(DocumentError::Malformed(_))));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings = merged(json!({
            "general": { "someFutureKey": 1 },
            "telemetry": { "enabled": true }
        }))
        .unwrap();
        assert_eq!(settings, Settings::with_scheme(generated()));
    }

    // ── Flatten ───────────────────────────────────────────────────────────────

    #[test]
    fn test_flatten_defaults_omits_optional_keys() {
        // Arrange
        let settings = Settings::with_scheme(generated());

        // Act
        let value = flatten_settings(&settings).to_value().unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "general": { "use12hTime": false, "ignoreHiddenFiles": false },
                "ui": { "menuItemSize": 80 },
                "installs": {
                    "ignoreRequiredFwVersion": true,
                    "showDeletionPromptAfterInstall": false,
                    "copyBufferMaxSize": 4194304
                },
                "export": { "decryptBufferMaxSize": 16777216 },
                "web": { "bookmarks": [] }
            })
        );
    }

    #[test]
    fn test_flatten_custom_scheme_writes_all_four_colors() {
        let mut settings = Settings::with_scheme(generated());
        settings.set_scheme_color(SchemeSlot::Text, Color::opaque(0xFF, 0xFF, 0xFF));

        let value = flatten_settings(&settings).to_value().unwrap();

        assert_eq!(value["ui"]["background"], "#010101FF");
        assert_eq!(value["ui"]["base"], "#020202FF");
        assert_eq!(value["ui"]["baseFocus"], "#030303FF");
        assert_eq!(value["ui"]["text"], "#FFFFFFFF");
    }

    #[test]
    fn test_flatten_writes_optional_values_when_set() {
        let mut settings = Settings::with_scheme(generated());
        settings.set_custom_language(Some(Language::Italian));
        settings.set_external_romfs(Some("/ext"));
        settings.progress_bar_color = Some(Color::new(9, 8, 7, 6));

        let value = flatten_settings(&settings).to_value().unwrap();

        assert_eq!(value["general"]["customLanguage"], "it");
        assert_eq!(value["general"]["externalRomFs"], "sdmc:/ext");
        assert_eq!(value["ui"]["progressBar"], "#09080706");
        assert!(value["ui"].get("scrollBar").is_none());
    }
}
