// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside stage-labelled wrappers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown style library '{0}'")]
    UnknownStyleLibrary(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in plan: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Malformed manifest at {path}: {reason}")]
    MalformedManifest { path: String, reason: String },

    #[error("Manifest at {path} is not a JSON object")]
    ManifestNotObject { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use letters, digits, hyphens, and underscores".into(),
                "Examples: my-app, shop_api, demo".into(),
            ],
            Self::UnknownStyleLibrary(_) => vec![
                "Supported style libraries:".into(),
                "  • shadcn   - shadcn/ui components".into(),
                "  • mantine  - Mantine components".into(),
            ],
            Self::MalformedManifest { path, .. } => vec![
                format!("Fix or remove the invalid JSON in {}", path),
                "The file was left untouched".into(),
            ],
            Self::ManifestNotObject { path } => vec![format!(
                "{} must contain a JSON object at the top level",
                path
            )],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::UnknownStyleLibrary(_)
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::MalformedManifest { .. } | Self::ManifestNotObject { .. } => {
                ErrorCategory::Manifest
            }
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Manifest,
    Internal,
}
