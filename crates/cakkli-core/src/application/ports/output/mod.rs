//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cakkli-adapters` crate provides implementations.

use std::path::Path;

use crate::error::CakkliResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cakkli_adapters::filesystem::LocalFilesystem` (production)
/// - `cakkli_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `create_dir` creates exactly one level. Creating a directory that already
///   exists succeeds; a missing parent is an error.
/// - `write_file` replaces the whole file in one step and never creates
///   parent directories.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory.
    fn create_dir(&self, path: &Path) -> CakkliResult<()>;

    /// Atomically write the full content of a file.
    fn write_file(&self, path: &Path, content: &str) -> CakkliResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> CakkliResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external frontend scaffold tool.
///
/// Implemented by `cakkli_adapters::scaffold_tool::ViteScaffold`. The call
/// blocks until the tool exits; its own output goes straight to the user.
#[cfg_attr(test, mockall::automock)]
pub trait FrontendScaffold: Send + Sync {
    /// Generate the frontend skeleton inside `project_root`.
    fn scaffold(&self, project_root: &Path) -> CakkliResult<()>;

    /// Human-readable command line, for logs and error messages.
    fn describe(&self) -> String;
}
