//! Domain value objects: StyleLibrary, ProjectName.
//!
//! Pure value types with equality-by-value and no identity, validated at
//! construction so the rest of the engine never re-checks them.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── StyleLibrary ─────────────────────────────────────────────────────────────

/// UI component library baked into the generated frontend and README.
///
/// The two variants are mutually exclusive; every style-conditioned template
/// section is keyed by [`StyleLibrary::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLibrary {
    Shadcn,
    Mantine,
}

impl StyleLibrary {
    pub const ALL: [StyleLibrary; 2] = [Self::Shadcn, Self::Mantine];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shadcn => "shadcn",
            Self::Mantine => "mantine",
        }
    }

    /// Human-facing name used in generated documentation.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Shadcn => "shadcn/ui",
            Self::Mantine => "Mantine",
        }
    }
}

impl fmt::Display for StyleLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleLibrary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shadcn" | "shadcn/ui" | "shadcn-ui" => Ok(Self::Shadcn),
            "mantine" => Ok(Self::Mantine),
            other => Err(DomainError::UnknownStyleLibrary(other.to_string())),
        }
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

/// Characters rejected because at least one mainstream filesystem forbids them.
const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// A non-empty, filesystem-safe directory name for the generated root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let raw = name.into();
        let name = raw.trim();

        let reject = |reason: &str| DomainError::InvalidProjectName {
            name: raw.clone(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if name == "." || name == ".." {
            return Err(reject("name cannot be a relative directory marker"));
        }
        if name.starts_with('.') {
            return Err(reject("name cannot start with '.'"));
        }
        if name.contains(FORBIDDEN_CHARS) {
            return Err(reject("name cannot contain path separators or reserved characters"));
        }
        if name.chars().any(char::is_control) {
            return Err(reject("name cannot contain control characters"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
