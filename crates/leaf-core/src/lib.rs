//! # leaf-core
//!
//! Shared library for the title manager's persistent settings: the settings
//! model with its defaults, the `#RRGGBBAA` color codec, display languages,
//! and the mapping between the in-memory model and the on-disk JSON document.
//!
//! This crate has zero dependencies on storage, host APIs, or UI toolkits.
//! The `leaf-settings` crate wires it to the SD card and the bundled resources.
//!
//! # Architecture overview (for beginners)
//!
//! The settings file lives on the SD card and is edited by hand as often as it
//! is written by the application, so it is usually *sparse*: a user may set a
//! single background color and nothing else.  Loading therefore starts from a
//! complete set of defaults and overlays only what the document contains.
//!
//! - **`domain`** – Pure types: [`Color`], [`ColorScheme`], [`Language`],
//!   [`Settings`], and the widget seams the settings can paint onto.
//!
//! - **`document`** – The serde mirror of the JSON file ([`SettingsDocument`])
//!   plus the two directions of the mapping: [`merge_document`] (document →
//!   settings) and [`flatten_settings`] (settings → document).

pub mod document;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `leaf_core::Settings` instead of `leaf_core::domain::settings::Settings`.
pub use document::codec::{flatten_settings, merge_document, DocumentError, SettingsDocument};
pub use domain::color::{Color, ColorError, ColorScheme, SchemeGenerator, SchemeSlot};
pub use domain::language::{Language, SystemLanguage};
pub use domain::settings::{
    normalize_external_romfs, BookmarkError, Scheme, Settings, WebBookmark, SD_CARD_PREFIX,
};
pub use domain::widgets::{ProgressColorTarget, ScrollbarColorTarget};
