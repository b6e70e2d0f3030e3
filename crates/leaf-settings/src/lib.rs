//! leaf-settings library crate.
//!
//! Loads the user's settings from the SD card, resolves defaults and the
//! effective display language, locates overridable resources, and writes the
//! settings back.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! [leaf-core]           Settings model, color codec, document mapping
//!         ↑
//! [leaf-settings]
//!   ├── application/    Ports (Explorer, SystemLocale, Keyboard, ResultHandler)
//!   │                   and use cases (SettingsService, ResourceLocator,
//!   │                   LanguageResolver, SettingsEditor)
//!   └── infrastructure/ Adapters: host-directory and in-memory explorers,
//!                       environment locale, random schemes, log reporter
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `leaf-core` and its own traits only.
//! - `infrastructure` implements the application traits and may touch the
//!   file system, environment, and random number generator.
//! - `main.rs` is the only place concrete adapters are chosen.

/// Application layer: ports and settings use cases.
pub mod application;

/// Infrastructure layer: storage, locale, scheme, and reporting adapters.
pub mod infrastructure;
