//! Domain entities for the settings subsystem.
//!
//! This module contains pure logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer holds the rules that make the settings what they are:
//! which fields exist, what their defaults are, how an external resource path
//! is normalized, how a color is written as text.  None of it touches the SD
//! card, the host locale, or a UI widget, so every rule here can be unit-tested
//! without any setup.

/// `#RRGGBBAA` color codec and the four-color UI scheme.
pub mod color;

/// Display languages and the host's system-language enumeration.
pub mod language;

/// The [`settings::Settings`] model and its defaults.
pub mod settings;

/// Traits for UI widgets whose colors the settings may override.
pub mod widgets;
