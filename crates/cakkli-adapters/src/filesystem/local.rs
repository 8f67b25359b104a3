//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use cakkli_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CakkliError, CakkliResult},
};
use tempfile::NamedTempFile;
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> CakkliResult<()> {
        match std::fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ApplicationError::MissingParentDirectory {
                    path: path.to_path_buf(),
                }
                .into())
            }
            Err(e) => Err(map_io_error(path, e, "create directory")),
        }
    }

    /// Writes to a temporary sibling and renames it into place, so readers
    /// never observe a half-written file.
    fn write_file(&self, path: &Path, content: &str) -> CakkliResult<()> {
        let parent = match path.parent() {
            Some(p) if p.is_dir() => p,
            _ => {
                return Err(ApplicationError::MissingParentDirectory {
                    path: path.to_path_buf(),
                }
                .into());
            }
        };

        let mut tmp =
            NamedTempFile::new_in(parent).map_err(|e| map_io_error(path, e, "create temp file"))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "replace file"))?;

        trace!(path = %path.display(), "File persisted");
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CakkliResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CakkliError {
    CakkliError::filesystem(path, format!("Failed to {}: {}", operation, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_is_single_level_and_idempotent() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("a");

        fs.create_dir(&dir).unwrap();
        fs.create_dir(&dir).unwrap();
        assert!(dir.is_dir());

        let err = fs.create_dir(&tmp.path().join("x/y")).unwrap_err();
        assert!(matches!(
            err,
            CakkliError::Application(ApplicationError::MissingParentDirectory { .. })
        ));
    }

    #[test]
    fn write_replaces_whole_file() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("package.json");

        fs.write_file(&file, "first version, longer").unwrap();
        fs.write_file(&file, "second").unwrap();

        assert_eq!(fs.read_to_string(&file).unwrap(), "second");
        // Only the target remains: no temp files left behind.
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_without_parent_fails() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .write_file(&tmp.path().join("missing/file.ts"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            CakkliError::Application(ApplicationError::MissingParentDirectory { .. })
        ));
        assert!(!tmp.path().join("missing").exists());
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&tmp.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            CakkliError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
