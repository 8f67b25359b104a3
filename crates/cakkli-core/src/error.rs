//! Unified error handling for cakkli core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, labels them with the generation [`Stage`] that failed, and maps
//! every failure onto the small [`FailureKind`] taxonomy callers branch on.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Ordered stages of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Guard,
    CreateRoot,
    FrontendScaffold,
    ClientManifest,
    ClientFiles,
    ServerFiles,
    RootFiles,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guard => "collision check",
            Self::CreateRoot => "root directory creation",
            Self::FrontendScaffold => "frontend scaffold",
            Self::ClientManifest => "client manifest patching",
            Self::ClientFiles => "client files",
            Self::ServerFiles => "server files",
            Self::RootFiles => "root files",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The failure taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Target root pre-exists; the user must pick another name.
    DirectoryExists,
    /// The external frontend tool failed or could not be started.
    ScaffoldToolFailed,
    /// Any filesystem read/write/parse failure while generating.
    Io,
    /// The configuration handed in was rejected.
    InvalidInput,
    /// A broken invariant inside the engine.
    Internal,
}

/// Root error type for cakkli core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CakkliError {
    /// Errors from the domain layer (validation, manifests).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, external tool).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// A failure labelled with the stage it happened in.
    #[error("{stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<CakkliError>,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CakkliError {
    /// Wrap `source` with the stage that produced it. Already-labelled errors
    /// keep their innermost stage.
    pub fn at(stage: Stage, source: CakkliError) -> Self {
        match source {
            labelled @ Self::Stage { .. } => labelled,
            other => Self::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ApplicationError::FilesystemError {
            path: path.into(),
            reason: reason.into(),
        }
        .into()
    }

    /// Stage the run stopped at, if the error came from a run.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The error without its stage label.
    pub fn root_cause(&self) -> &CakkliError {
        match self {
            Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self.root_cause() {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => FailureKind::InvalidInput,
                crate::domain::ErrorCategory::Manifest => FailureKind::Io,
                crate::domain::ErrorCategory::Internal => FailureKind::Internal,
            },
            Self::Application(e) => e.kind(),
            Self::Stage { .. } | Self::Internal { .. } => FailureKind::Internal,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self.root_cause() {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            _ => vec![
                "This appears to be a bug in cakkli".into(),
                "Please report it together with the output of -vvv".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self.root_cause() {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Manifest => ErrorCategory::Manifest,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            _ => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    External,
    Filesystem,
    Manifest,
    Internal,
}

/// Convenient result type alias.
pub type CakkliResult<T> = Result<T, CakkliError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> CakkliResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CakkliResult<T> {
        self.map_err(|e| CakkliError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exists() -> CakkliError {
        ApplicationError::DirectoryExists {
            path: "demo".into(),
        }
        .into()
    }

    #[test]
    fn stage_label_appears_in_message() {
        let err = CakkliError::at(Stage::Guard, exists());
        assert_eq!(err.to_string(), "collision check failed: Directory demo already exists");
        assert_eq!(err.stage(), Some(Stage::Guard));
        assert_eq!(err.kind(), FailureKind::DirectoryExists);
    }

    #[test]
    fn innermost_stage_wins() {
        let inner = CakkliError::at(Stage::ClientManifest, exists());
        let outer = CakkliError::at(Stage::ClientFiles, inner);
        assert_eq!(outer.stage(), Some(Stage::ClientManifest));
    }

    #[test]
    fn manifest_errors_are_io() {
        let err: CakkliError = DomainError::MalformedManifest {
            path: "client/package.json".into(),
            reason: "EOF".into(),
        }
        .into();
        assert_eq!(err.kind(), FailureKind::Io);
        assert_eq!(err.category(), ErrorCategory::Manifest);
    }

    #[test]
    fn invalid_name_is_invalid_input() {
        let err: CakkliError = DomainError::InvalidProjectName {
            name: "".into(),
            reason: "empty".into(),
        }
        .into();
        assert_eq!(err.kind(), FailureKind::InvalidInput);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let res: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = res.context("formatting").unwrap_err();
        assert!(matches!(err, CakkliError::Internal { .. }));
        assert_eq!(err.kind(), FailureKind::Internal);
    }
}
