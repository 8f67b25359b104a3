//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use cakkli_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CakkliError, CakkliResult},
};

/// In-memory filesystem for testing.
///
/// Enforces the same rules as the local adapter (single-level directory
/// creation, no writes into missing directories) and records the order in
/// which directories were created.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    creation_order: Vec<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a pre-existing directory and all its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            for ancestor in path.as_ref().ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    inner.directories.insert(ancestor.to_path_buf());
                }
            }
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Directories created through the port, in creation order.
    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.creation_order.clone())
            .unwrap_or_default()
    }

    /// Number of successful `create_dir` and `write_file` calls that changed state.
    pub fn mutation_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.creation_order.len() + inner.writes)
            .unwrap_or_default()
    }

    fn read(&self) -> CakkliResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> CakkliResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> CakkliError {
    CakkliError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(p) if p.as_os_str().is_empty() => true,
            Some(p) => self.directories.contains(p),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> CakkliResult<()> {
        let mut inner = self.write()?;

        if inner.directories.contains(path) {
            return Ok(());
        }
        if inner.files.contains_key(path) {
            return Err(CakkliError::filesystem(path, "a file exists at this path"));
        }
        if !inner.parent_exists(path) {
            return Err(ApplicationError::MissingParentDirectory {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.directories.insert(path.to_path_buf());
        inner.creation_order.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CakkliResult<()> {
        let mut inner = self.write()?;

        if !inner.parent_exists(path) {
            return Err(ApplicationError::MissingParentDirectory {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CakkliResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| CakkliError::filesystem(path, "Failed to read file: not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
