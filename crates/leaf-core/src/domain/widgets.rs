//! Seams between the settings and the UI toolkit.
//!
//! The settings never draw anything.  They only push an override color into a
//! widget, and only when the user configured one; otherwise the widget keeps
//! its built-in default.

use super::color::Color;

/// A menu (or any scrollable list) with a configurable scrollbar color.
pub trait ScrollbarColorTarget {
    fn set_scrollbar_color(&mut self, color: Color);
}

/// A progress bar with a configurable fill color.
pub trait ProgressColorTarget {
    fn set_progress_color(&mut self, color: Color);
}
