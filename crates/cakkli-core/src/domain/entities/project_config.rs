use std::fmt;

use crate::domain::value_objects::{ProjectName, StyleLibrary};

/// Fully resolved configuration for one generation run.
///
/// Immutable once built; the orchestrator borrows it for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: ProjectName,
    style: StyleLibrary,
}

impl ProjectConfig {
    pub fn new(name: ProjectName, style: StyleLibrary) -> Self {
        Self { name, style }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn style(&self) -> StyleLibrary {
        self.style
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.style)
    }
}
