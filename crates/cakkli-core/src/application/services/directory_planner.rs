use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::DirectorySpec,
    error::CakkliResult,
};

/// Creates the directories of one package, parents first.
///
/// Intermediate directories that already exist are fine; only the project
/// root itself is guarded (see [`CollisionGuard`](super::CollisionGuard)).
pub struct DirectoryPlanner<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryPlanner<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Create every directory of `spec` under `root`.
    ///
    /// Returns the directories that did not exist before, in creation order.
    pub fn plan(&self, root: &Path, spec: &DirectorySpec) -> CakkliResult<Vec<PathBuf>> {
        spec.validate()?;

        let mut created = Vec::new();
        for dir in spec.creation_order()? {
            let path = root.join(dir.as_path());
            if self.filesystem.exists(&path) {
                continue;
            }
            self.filesystem.create_dir(&path)?;
            debug!(dir = %dir, "Created directory");
            created.push(path);
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fake::RecordingFilesystem;
    use crate::domain::DomainError;
    use crate::error::CakkliError;

    #[test]
    fn parents_are_created_before_children() {
        let fs = RecordingFilesystem::with_dirs(["/p"]);
        let spec = DirectorySpec::new("server/src").with_dirs(["modules/user", "modules/health"]);

        DirectoryPlanner::new(&fs).plan(Path::new("/p"), &spec).unwrap();

        let order = fs.created_dirs();
        assert_eq!(
            order,
            vec![
                PathBuf::from("/p/server"),
                PathBuf::from("/p/server/src"),
                PathBuf::from("/p/server/src/modules"),
                PathBuf::from("/p/server/src/modules/user"),
                PathBuf::from("/p/server/src/modules/health"),
            ]
        );
    }

    #[test]
    fn existing_intermediate_directories_are_skipped() {
        let fs = RecordingFilesystem::with_dirs(["/p", "/p/client", "/p/client/src"]);
        let spec = DirectorySpec::new("client/src").with_dirs(["hooks"]);

        let created = DirectoryPlanner::new(&fs).plan(Path::new("/p"), &spec).unwrap();

        assert_eq!(created, vec![PathBuf::from("/p/client/src/hooks")]);
    }

    #[test]
    fn duplicate_entries_fail_before_any_write() {
        let fs = RecordingFilesystem::with_dirs(["/p"]);
        let spec = DirectorySpec::new("x").with_dirs(["a", "a"]);

        let err = DirectoryPlanner::new(&fs).plan(Path::new("/p"), &spec).unwrap_err();

        assert!(matches!(err, CakkliError::Domain(DomainError::DuplicatePath { .. })));
        assert!(fs.created_dirs().is_empty());
    }
}
