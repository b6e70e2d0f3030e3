//! Ports onto the UI toolkit used by the settings use cases.
//!
//! The dialogs themselves live in the UI layer.  The settings code only needs
//! to ask for a line of text and to tell the user that something went wrong.

/// Longest text the software keyboard accepts.
pub const MAX_KEYBOARD_TEXT_LENGTH: u32 = 500;

/// The on-screen keyboard.
#[cfg_attr(test, mockall::automock)]
pub trait Keyboard {
    /// Shows the keyboard with `guide` as the hint and `initial` pre-filled.
    ///
    /// Returns `None` if the user cancelled.
    fn show_keyboard(&self, guide: &str, initial: &str, max_len: u32) -> Option<String>;
}

/// Surfaces a failed operation to the user.
///
/// Implementations show a generic "operation failed" message; the error is
/// passed along for logging, not for structured display.
pub trait ResultHandler {
    fn handle_result(&self, error: &(dyn std::error::Error + 'static), context: &str);
}
