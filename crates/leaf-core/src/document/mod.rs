//! The on-disk settings document.
//!
//! The settings file is a JSON object with five sections:
//!
//! ```json
//! {
//!   "general":  { "customLanguage": "fr", "externalRomFs": "sdmc:/ext",
//!                 "use12hTime": false, "ignoreHiddenFiles": false },
//!   "ui":       { "background": "#1E1E2EFF", "base": "...", "baseFocus": "...",
//!                 "text": "...", "menuItemSize": 80,
//!                 "scrollBar": "...", "progressBar": "..." },
//!   "installs": { "ignoreRequiredFwVersion": true,
//!                 "showDeletionPromptAfterInstall": false,
//!                 "copyBufferMaxSize": 4194304 },
//!   "export":   { "decryptBufferMaxSize": 16777216 },
//!   "web":      { "bookmarks": [ { "name": "...", "url": "..." } ] }
//! }
//! ```
//!
//! Every section and every key is optional.  See [`codec`] for how a sparse
//! document is merged onto the defaults.

pub mod codec;
