//! SettingsEditor: keyboard-driven edits from the settings menu.
//!
//! Each edit shows the software keyboard, validates what was typed, and
//! updates the in-memory [`Settings`].  Nothing is written to disk here; the
//! menu calls `SettingsService::save` once the user leaves it.

use leaf_core::{Settings, WebBookmark};
use thiserror::Error;

use super::collaborators::{Keyboard, ResultHandler, MAX_KEYBOARD_TEXT_LENGTH};

pub const EXTERNAL_ROMFS_GUIDE: &str = "External resource folder";
pub const BOOKMARK_NAME_GUIDE: &str = "Bookmark name";
pub const BOOKMARK_URL_GUIDE: &str = "Bookmark URL";
pub const MENU_ITEM_SIZE_GUIDE: &str = "Menu item size (pixels)";

/// Error type for values typed on the keyboard.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("{0:?} is not a positive whole number")]
    InvalidNumber(String),
}

/// Applies keyboard input to settings.
pub struct SettingsEditor<'a> {
    keyboard: &'a dyn Keyboard,
    reporter: &'a dyn ResultHandler,
}

impl<'a> SettingsEditor<'a> {
    pub fn new(keyboard: &'a dyn Keyboard, reporter: &'a dyn ResultHandler) -> Self {
        Self { keyboard, reporter }
    }

    fn prompt(&self, guide: &str, initial: &str) -> Option<String> {
        self.keyboard
            .show_keyboard(guide, initial, MAX_KEYBOARD_TEXT_LENGTH)
    }

    /// Edits the external resource root.  An empty entry removes it.
    ///
    /// Returns `true` if the settings changed.
    pub fn edit_external_romfs(&self, settings: &mut Settings) -> bool {
        let current = settings.external_romfs().unwrap_or_default().to_string();
        let Some(entered) = self.prompt(EXTERNAL_ROMFS_GUIDE, &current) else {
            return false;
        };

        let before = settings.external_romfs().map(str::to_string);
        settings.set_external_romfs(Some(entered.trim()));
        settings.external_romfs() != before.as_deref()
    }

    /// Asks for a name and a URL and appends the bookmark.
    ///
    /// Returns `false` (and adds nothing) if either prompt is cancelled or
    /// left empty.
    pub fn add_bookmark(&self, settings: &mut Settings) -> bool {
        let Some(name) = self.prompt(BOOKMARK_NAME_GUIDE, "") else {
            return false;
        };
        let Some(url) = self.prompt(BOOKMARK_URL_GUIDE, "https://") else {
            return false;
        };

        match WebBookmark::new(name.trim(), url.trim()) {
            Ok(bmk) => settings.add_bookmark(bmk).is_ok(),
            Err(_) => false,
        }
    }

    /// Edits the menu item size.  Input that is not a positive integer is
    /// reported and leaves the size unchanged.
    ///
    /// Returns `true` if the settings changed.
    pub fn edit_menu_item_size(&self, settings: &mut Settings) -> bool {
        let current = settings.menu_item_size.to_string();
        let Some(entered) = self.prompt(MENU_ITEM_SIZE_GUIDE, &current) else {
            return false;
        };

        match entered.trim().parse::<u32>() {
            Ok(size) if size > 0 => {
                let changed = size != settings.menu_item_size;
                settings.menu_item_size = size;
                changed
            }
            _ => {
                let err = EditError::InvalidNumber(entered);
                self.reporter.handle_result(&err, MENU_ITEM_SIZE_GUIDE);
                false
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
