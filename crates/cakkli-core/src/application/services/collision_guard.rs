use std::path::Path;

use tracing::debug;

use crate::application::{ApplicationError, ports::Filesystem};

/// Pre-flight check that the project root is free.
///
/// Runs before anything else touches the disk; the orchestrator never creates
/// a path until this has passed.
pub struct CollisionGuard<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> CollisionGuard<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    pub fn check(&self, root: &Path) -> Result<(), ApplicationError> {
        if self.filesystem.exists(root) {
            return Err(ApplicationError::DirectoryExists {
                path: root.to_path_buf(),
            });
        }
        debug!(root = %root.display(), "Target root is free");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[test]
    fn existing_root_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("/work/demo")))
            .return_const(true);
        fs.expect_create_dir().never();
        fs.expect_write_file().never();

        let err = CollisionGuard::new(&fs)
            .check(Path::new("/work/demo"))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::DirectoryExists { .. }));
    }

    #[test]
    fn free_root_passes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        assert!(CollisionGuard::new(&fs).check(Path::new("/work/demo")).is_ok());
    }
}
