//! The in-memory settings model.
//!
//! [`Settings`] holds every user-configurable value together with its
//! documented default.  Values the user may leave *unset* (as opposed to
//! "set to the default") are `Option`s, and the color scheme is a [`Scheme`]
//! sum type, so whether a value was configured can never disagree with the
//! value itself.
//!
//! # Defaults
//!
//! | Field                                | Default          |
//! |--------------------------------------|------------------|
//! | custom_language                      | `None`           |
//! | external_romfs                       | `None`           |
//! | use_12h_time                         | `false`          |
//! | ignore_hidden_files                  | `false`          |
//! | scheme                               | generated        |
//! | menu_item_size                       | `80`             |
//! | scrollbar_color / progress_bar_color | `None`           |
//! | ignore_required_fw_version           | `true`           |
//! | show_deletion_prompt_after_install   | `false`          |
//! | copy_buffer_max_size                 | 4 MiB            |
//! | decrypt_buffer_max_size              | 16 MiB           |
//! | bookmarks                            | empty            |

use thiserror::Error;

use super::color::{Color, ColorScheme, SchemeSlot};
use super::language::Language;
use super::widgets::{ProgressColorTarget, ScrollbarColorTarget};

/// Mount prefix of the SD card.  External resource roots always start with it.
pub const SD_CARD_PREFIX: &str = "sdmc:/";

/// Default height of one menu item in pixels.
pub const DEFAULT_MENU_ITEM_SIZE: u32 = 80;

/// Height of the main menu area in pixels.
pub const DEFAULT_MENU_HEIGHT: u32 = 560;

pub const DEFAULT_COPY_BUFFER_MAX_SIZE: u64 = 4 * 1024 * 1024;
pub const DEFAULT_DECRYPT_BUFFER_MAX_SIZE: u64 = 16 * 1024 * 1024;

/// Error returned when a bookmark cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookmarkError {
    #[error("bookmark name must not be empty")]
    EmptyName,
    #[error("bookmark URL must not be empty")]
    EmptyUrl,
}

/// A saved web-browser bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebBookmark {
    pub name: String,
    pub url: String,
}

impl WebBookmark {
    /// Creates a bookmark, rejecting an empty name or URL.
    ///
    /// # Errors
    ///
    /// Returns [`BookmarkError::EmptyName`] or [`BookmarkError::EmptyUrl`].
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, BookmarkError> {
        let name = name.into();
        let url = url.into();
        if name.is_empty() {
            return Err(BookmarkError::EmptyName);
        }
        if url.is_empty() {
            return Err(BookmarkError::EmptyUrl);
        }
        Ok(Self { name, url })
    }
}

/// The UI color scheme and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Freshly generated for this load; never written to disk.
    Generated(ColorScheme),
    /// At least one color was configured by the user; persisted in full.
    Custom(ColorScheme),
}

impl Scheme {
    /// The colors to paint with, regardless of origin.
    pub fn colors(&self) -> &ColorScheme {
        match self {
            Scheme::Generated(colors) | Scheme::Custom(colors) => colors,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Scheme::Custom(_))
    }

    /// Overrides one slot.  The other three keep their current colors, which
    /// for a generated scheme means the generated ones.
    pub fn set(&mut self, slot: SchemeSlot, color: Color) {
        let mut colors = *self.colors();
        colors.set(slot, color);
        *self = Scheme::Custom(colors);
    }
}

/// Every user-configurable setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Overrides the host language when set.
    pub custom_language: Option<Language>,
    /// External resource root on the SD card; always normalized.
    external_romfs: Option<String>,
    pub use_12h_time: bool,
    pub ignore_hidden_files: bool,

    pub scheme: Scheme,
    /// Height of one menu item in pixels.
    pub menu_item_size: u32,
    pub scrollbar_color: Option<Color>,
    pub progress_bar_color: Option<Color>,

    pub ignore_required_fw_version: bool,
    pub show_deletion_prompt_after_install: bool,
    pub copy_buffer_max_size: u64,

    pub decrypt_buffer_max_size: u64,

    bookmarks: Vec<WebBookmark>,
}

impl Settings {
    /// Returns the default settings painted with the given generated scheme.
    pub fn with_scheme(generated: ColorScheme) -> Self {
        Self {
            custom_language: None,
            external_romfs: None,
            use_12h_time: false,
            ignore_hidden_files: false,
            scheme: Scheme::Generated(generated),
            menu_item_size: DEFAULT_MENU_ITEM_SIZE,
            scrollbar_color: None,
            progress_bar_color: None,
            ignore_required_fw_version: true,
            show_deletion_prompt_after_install: false,
            copy_buffer_max_size: DEFAULT_COPY_BUFFER_MAX_SIZE,
            decrypt_buffer_max_size: DEFAULT_DECRYPT_BUFFER_MAX_SIZE,
            bookmarks: Vec::new(),
        }
    }

    /// The external resource root, if configured.  Always starts with
    /// [`SD_CARD_PREFIX`].
    pub fn external_romfs(&self) -> Option<&str> {
        self.external_romfs.as_deref()
    }

    /// Sets (normalizing it) or clears the external resource root.  An empty
    /// path clears it.
    pub fn set_external_romfs(&mut self, path: Option<&str>) {
        self.external_romfs = path
            .filter(|p| !p.is_empty())
            .map(normalize_external_romfs);
    }

    pub fn set_custom_language(&mut self, lang: Option<Language>) {
        self.custom_language = lang;
    }

    pub fn has_custom_scheme(&self) -> bool {
        self.scheme.is_custom()
    }

    pub fn color_scheme(&self) -> &ColorScheme {
        self.scheme.colors()
    }

    /// Overrides one color of the scheme, making the scheme custom.
    pub fn set_scheme_color(&mut self, slot: SchemeSlot, color: Color) {
        self.scheme.set(slot, color);
    }

    /// Saved bookmarks in insertion order.
    pub fn bookmarks(&self) -> &[WebBookmark] {
        &self.bookmarks
    }

    /// Appends a bookmark.
    ///
    /// # Errors
    ///
    /// Returns a [`BookmarkError`] if the name or URL is empty; nothing is
    /// stored in that case.
    pub fn add_bookmark(&mut self, bookmark: WebBookmark) -> Result<(), BookmarkError> {
        // Fields are public, so a bookmark may not have gone through `new`.
        let checked = WebBookmark::new(bookmark.name, bookmark.url)?;
        self.bookmarks.push(checked);
        Ok(())
    }

    /// Removes and returns the bookmark at `index`, if any.
    pub fn remove_bookmark(&mut self, index: usize) -> Option<WebBookmark> {
        (index < self.bookmarks.len()).then(|| self.bookmarks.remove(index))
    }

    /// Number of menu items that fit on screen at the configured item size.
    pub fn default_menu_item_count(&self) -> u32 {
        DEFAULT_MENU_HEIGHT
            .checked_div(self.menu_item_size)
            .unwrap_or(0)
    }

    /// Paints the scrollbar of `menu` if a scrollbar color is configured.
    pub fn apply_scrollbar_color<T: ScrollbarColorTarget + ?Sized>(&self, menu: &mut T) {
        if let Some(color) = self.scrollbar_color {
            menu.set_scrollbar_color(color);
        }
    }

    /// Paints the fill of `bar` if a progress bar color is configured.
    pub fn apply_progress_bar_color<T: ProgressColorTarget + ?Sized>(&self, bar: &mut T) {
        if let Some(color) = self.progress_bar_color {
            bar.set_progress_color(color);
        }
    }
}

/// Rewrites `path` so it is rooted on the SD card.
///
/// ```rust
/// use leaf_core::normalize_external_romfs;
///
/// assert_eq!(normalize_external_romfs("ext"), "sdmc:/ext");
/// assert_eq!(normalize_external_romfs("/ext"), "sdmc:/ext");
/// assert_eq!(normalize_external_romfs("sdmc:/ext"), "sdmc:/ext");
/// ```
pub fn normalize_external_romfs(path: &str) -> String {
    if path.starts_with(SD_CARD_PREFIX) {
        return path.to_string();
    }

    let mut normalized = String::from("sdmc:");
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    normalized
}

// ── Tests ─────────────────────────────────────────────────────────────────────
