//! Infrastructure adapters for cakkli.
//!
//! This crate implements the ports defined in `cakkli-core::application::ports`.
//! It contains all disk and process I/O.

pub mod filesystem;
pub mod scaffold_tool;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use scaffold_tool::ViteScaffold;
