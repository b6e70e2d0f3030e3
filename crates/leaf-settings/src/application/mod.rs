//! Application layer use cases for the settings subsystem.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (`leaf-core`) and the infrastructure (SD card, host locale, UI toolkit).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a goal (e.g., "load the settings
//!   file and overlay it onto the defaults").
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so the SD card can be replaced by a temp directory or a `HashMap` in tests.
//! - **Contain no direct file system or host calls**.
//!
//! # Sub-modules
//!
//! - **`storage`**          – The `Explorer` port over a mounted storage root.
//! - **`resources`**        – Resolves resource paths, preferring the external
//!   resource root on the SD card over the bundled RomFS.
//! - **`language`**         – Detects the host language once and resolves the
//!   effective display language.
//! - **`settings_service`** – Load and save of the settings file.
//! - **`collaborators`**    – Keyboard and result-reporting ports of the UI.
//! - **`settings_editor`**  – Keyboard-driven edits of individual settings.

pub mod collaborators;
pub mod language;
pub mod resources;
pub mod settings_editor;
pub mod settings_service;
pub mod storage;
