//! Storage infrastructure: [`Explorer`](crate::application::storage::Explorer)
//! implementations.
//!
//! - `fs_explorer` maps a mount (`sdmc`, `romfs`) onto a host directory.  On
//!   the console the mounts are real devices; on a development machine they
//!   are plain folders.
//! - `memory` keeps files in a map and is used by tests and demos.

pub mod fs_explorer;
pub mod memory;
