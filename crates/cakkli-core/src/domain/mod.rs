// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for cakkli.
//!
//! Pure generation logic: validated inputs, the render context, the manifest
//! merge and the fixed template catalogue. All disk and process access goes
//! through the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Deterministic**: every template is a pure function of [`ProjectConfig`]
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    DirectorySpec, ManifestPatch, ProjectConfig, RelativePath, RenderContext, TemplateBody,
    TemplateFile,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{ProjectName, StyleLibrary};
