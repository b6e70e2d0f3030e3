//! Infrastructure layer for the settings subsystem.
//!
//! Contains the adapters behind the application ports: file-system and
//! in-memory storage, the host locale, the random scheme generator, and the
//! log-backed result reporter.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `leaf_core`, but MUST NOT be imported by the `application` layer.

pub mod locale;
pub mod report;
pub mod scheme;
pub mod storage;
