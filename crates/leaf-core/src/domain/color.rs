//! RGBA colors, their `#RRGGBBAA` text form, and the UI color scheme.
//!
//! # Wire format
//!
//! The settings document stores every color as a hex string:
//!
//! ```text
//! #1E2A3CFF
//!  ││││││└┴─ alpha
//!  ││││└┴─── blue
//!  ││└┴───── green
//!  └┴─────── red
//! ```
//!
//! Encoding always produces 8 uppercase digits.  Decoding is more lenient, as
//! the file is often edited by hand: the `#` is optional, digits may be any
//! case, and the 6-digit `#RRGGBB` form is accepted with an opaque alpha.

use std::fmt;

use thiserror::Error;

/// Error returned when a color string cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string (without `#`) is neither 6 nor 8 characters long.
    #[error("expected 6 or 8 hex digits, got {0} characters")]
    InvalidLength(usize),

    /// The string contains a character outside `0-9`, `a-f`, `A-F`.
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

/// A 4-channel, 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Encodes the color as `#RRGGBBAA` (uppercase, fixed width).
    ///
    /// # Example
    ///
    /// ```rust
    /// use leaf_core::Color;
    ///
    /// assert_eq!(Color::new(0x12, 0xAB, 0x00, 0xFF).to_hex(), "#12AB00FF");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Decodes `#RRGGBBAA`, `#RRGGBB`, or either form without the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLength`] or [`ColorError::InvalidDigit`]
    /// when the text is not a well-formed hex color.
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        let digits = text.strip_prefix('#').unwrap_or(text);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(text.to_string()));
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::InvalidLength(digits.len()));
        }

        // All bytes are ASCII hex digits at this point, so slicing on byte
        // offsets never splits a character.
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidDigit(text.to_string()))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The four colors every screen of the UI is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorScheme {
    /// Window background.
    pub background: Color,
    /// Menu item background.
    pub base: Color,
    /// Menu item background while focused.
    pub base_focus: Color,
    /// Foreground text.
    pub text: Color,
}

/// Names one of the four colors of a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeSlot {
    Background,
    Base,
    BaseFocus,
    Text,
}

impl ColorScheme {
    /// Returns the color stored in `slot`.
    pub fn get(&self, slot: SchemeSlot) -> Color {
        match slot {
            SchemeSlot::Background => self.background,
            SchemeSlot::Base => self.base,
            SchemeSlot::BaseFocus => self.base_focus,
            SchemeSlot::Text => self.text,
        }
    }

    /// Replaces the color stored in `slot`.
    pub fn set(&mut self, slot: SchemeSlot, color: Color) {
        match slot {
            SchemeSlot::Background => self.background = color,
            SchemeSlot::Base => self.base = color,
            SchemeSlot::BaseFocus => self.base_focus = color,
            SchemeSlot::Text => self.text = color,
        }
    }
}

/// Produces the scheme used when the user has not configured one.
///
/// The settings loader asks for one fresh scheme per load; an implementation
/// may return a different scheme every time.
pub trait SchemeGenerator: Send + Sync {
    /// Generates a new scheme.
    fn generate(&self) -> ColorScheme;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_is_uppercase_fixed_width_rgba_order() {
        // Arrange
        let color = Color::new(0x0a, 0xbc, 0x01, 0x7f);

        // Act
        let hex = color.to_hex();

        // Assert
        assert_eq!(hex, "#0ABC017F");
        assert_eq!(hex.len(), 9);
    }

    #[test]
    fn test_to_hex_pads_zero_channels() {
        assert_eq!(Color::new(0, 0, 0, 0).to_hex(), "#00000000");
    }

    #[test]
    fn test_display_matches_to_hex() {
        let color = Color::opaque(0x11, 0x22, 0x33);
        assert_eq!(color.to_string(), "#112233FF");
    }

    #[test]
    fn test_from_hex_decodes_eight_digits() {
        let color = Color::from_hex("#12345678").unwrap();
        assert_eq!(color, Color::new(0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn test_from_hex_accepts_lowercase_and_missing_hash() {
        let color = Color::from_hex("abcdef80").unwrap();
        assert_eq!(color, Color::new(0xAB, 0xCD, 0xEF, 0x80));
    }

    #[test]
    fn test_from_hex_six_digits_is_opaque() {
        let color = Color::from_hex("#FF8000").unwrap();
        assert_eq!(color, Color::opaque(0xFF, 0x80, 0x00));
    }

    #[test]
    fn test_from_hex_rejects_bad_length() {
        assert_eq!(Color::from_hex("#FFF"), Err(ColorError::InvalidLength(3)));
        assert_eq!(Color::from_hex(""), Err(ColorError::InvalidLength(0)));
    }

    #[test]
    fn test_from_hex_rejects_non_hex_characters() {
        let result = Color::from_hex("#GG000000");
        assert!(matches!(result, Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn test_from_hex_rejects_multibyte_input_without_panicking() {
        // Four two-byte characters are eight bytes long; they must be rejected
        // as non-hex rather than sliced mid-character.
        let result = Color::from_hex("#éééé");
        assert!(matches!(result, Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn test_hex_round_trip_is_lossless() {
        let color = Color::new(0x01, 0x80, 0xFE, 0x33);
        assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_scheme_get_and_set_address_the_right_slot() {
        // Arrange
        let mut scheme = ColorScheme::default();
        let red = Color::opaque(0xFF, 0, 0);

        // Act
        scheme.set(SchemeSlot::BaseFocus, red);

        // Assert
        assert_eq!(scheme.get(SchemeSlot::BaseFocus), red);
        assert_eq!(scheme.base_focus, red);
        assert_eq!(scheme.get(SchemeSlot::Background), Color::default());
        assert_eq!(scheme.get(SchemeSlot::Base), Color::default());
        assert_eq!(scheme.get(SchemeSlot::Text), Color::default());
    }
}
