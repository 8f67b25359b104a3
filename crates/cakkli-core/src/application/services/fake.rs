//! Recording in-memory filesystem for service tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::{ApplicationError, ports::Filesystem};
use crate::error::CakkliResult;

#[derive(Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    created: Vec<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

#[derive(Default)]
pub struct RecordingFilesystem {
    state: Mutex<State>,
}

impl RecordingFilesystem {
    pub fn with_dirs<const N: usize>(dirs: [&str; N]) -> Self {
        let fs = Self::default();
        fs.state.lock().unwrap().dirs.extend(dirs.iter().map(PathBuf::from));
        fs
    }

    pub fn put(&self, path: &str, content: &str) {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(PathBuf::from(path), content.to_string());
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().created.clone()
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir(&self, path: &Path) -> CakkliResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.dirs.contains(path) {
            return Ok(());
        }
        let parent_ok = path.parent().is_some_and(|p| state.dirs.contains(p));
        if !parent_ok {
            return Err(ApplicationError::MissingParentDirectory {
                path: path.to_path_buf(),
            }
            .into());
        }
        state.dirs.insert(path.to_path_buf());
        state.created.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CakkliResult<()> {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CakkliResult<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| crate::error::CakkliError::filesystem(path, "not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.dirs.contains(path) || state.files.contains_key(path)
    }
}

impl Filesystem for std::sync::Arc<RecordingFilesystem> {
    fn create_dir(&self, path: &Path) -> CakkliResult<()> {
        self.as_ref().create_dir(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> CakkliResult<()> {
        self.as_ref().write_file(path, content)
    }

    fn read_to_string(&self, path: &Path) -> CakkliResult<String> {
        self.as_ref().read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.as_ref().exists(path)
    }
}
