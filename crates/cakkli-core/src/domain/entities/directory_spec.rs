use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Ordered set of directories one package needs before its files are written.
///
/// Entries are relative to `base` (itself relative to the project root).
/// The declared order is kept; [`DirectorySpec::creation_order`] expands it so
/// that every parent appears before its child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    base: RelativePath,
    entries: Vec<RelativePath>,
}

impl DirectorySpec {
    pub fn new(base: impl Into<RelativePath>) -> Self {
        Self {
            base: base.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_dir(mut self, dir: impl Into<RelativePath>) -> Self {
        self.entries.push(dir.into());
        self
    }

    pub fn with_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RelativePath>,
    {
        self.entries.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Reject plans that list the same directory twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry) {
                return Err(DomainError::DuplicatePath {
                    path: entry.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Root-relative directories in creation order.
    ///
    /// Each declared entry is preceded by all of its not-yet-listed ancestors,
    /// starting with the base itself. Paths already emitted are skipped, so the
    /// result is free of duplicates and parent-before-child.
    pub fn creation_order(&self) -> Result<Vec<RelativePath>, DomainError> {
        let mut emitted = HashSet::new();
        let mut order = Vec::new();

        for entry in &self.entries {
            let full = self.base.join(entry)?;
            for dir in full.ancestors().into_iter().chain(std::iter::once(full)) {
                if emitted.insert(dir.clone()) {
                    order.push(dir);
                }
            }
        }

        if order.is_empty() {
            order.extend(self.base.ancestors());
            order.push(self.base.clone());
        }

        Ok(order)
    }
}
