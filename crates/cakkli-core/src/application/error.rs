//! Application layer errors.
//!
//! These errors represent failures while driving the filesystem and the
//! frontend scaffold tool. Validation and manifest errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, FailureKind};

/// Errors that occur during generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The target root is already present on disk.
    #[error("Directory {path} already exists")]
    DirectoryExists { path: PathBuf },

    /// The frontend scaffold tool ran and reported failure.
    #[error("`{command}` exited with {}", exit_status(.code))]
    ScaffoldToolFailed { command: String, code: Option<i32> },

    /// The frontend scaffold tool could not be started at all.
    #[error("Could not run `{command}`: {reason}")]
    ScaffoldToolUnavailable { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file was about to be written into a directory nobody planned.
    #[error("Parent directory of {path} does not exist")]
    MissingParentDirectory { path: PathBuf },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::ScaffoldToolFailed { .. } => vec![
                "Check the scaffold tool output above for details".into(),
                "The partially created project directory was left in place".into(),
                "Remove it before retrying with the same name".into(),
            ],
            Self::ScaffoldToolUnavailable { command, .. } => vec![
                format!("Ensure `{}` is installed and in your PATH", command),
                "Node.js 20+ ships with npm".into(),
                "Or point frontend.runner at another runner in the config file".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::MissingParentDirectory { .. } => vec![
                "This is a bug in the directory plan, please report it".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } => ErrorCategory::Conflict,
            Self::ScaffoldToolFailed { .. } | Self::ScaffoldToolUnavailable { .. } => {
                ErrorCategory::External
            }
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::MissingParentDirectory { .. } => ErrorCategory::Internal,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::DirectoryExists { .. } => FailureKind::DirectoryExists,
            Self::ScaffoldToolFailed { .. } | Self::ScaffoldToolUnavailable { .. } => {
                FailureKind::ScaffoldToolFailed
            }
            Self::FilesystemError { .. } | Self::MissingParentDirectory { .. } => FailureKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_message_carries_exit_code() {
        let err = ApplicationError::ScaffoldToolFailed {
            command: "npm create vite@latest".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "`npm create vite@latest` exited with exit code 1");

        let killed = ApplicationError::ScaffoldToolFailed {
            command: "npm".into(),
            code: None,
        };
        assert!(killed.to_string().contains("signal"));
    }

    #[test]
    fn kinds_follow_the_taxonomy() {
        let exists = ApplicationError::DirectoryExists { path: "demo".into() };
        assert_eq!(exists.kind(), FailureKind::DirectoryExists);
        assert_eq!(exists.category(), ErrorCategory::Conflict);

        let missing = ApplicationError::ScaffoldToolUnavailable {
            command: "npm".into(),
            reason: "not found".into(),
        };
        assert_eq!(missing.kind(), FailureKind::ScaffoldToolFailed);

        let io = ApplicationError::MissingParentDirectory { path: "x/y".into() };
        assert_eq!(io.kind(), FailureKind::Io);
    }
}
