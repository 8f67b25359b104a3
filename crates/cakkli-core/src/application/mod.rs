//! Application layer for cakkli.
//!
//! This layer contains:
//! - **Services**: the generation steps and the orchestrator that runs them
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! All generation content lives in `crate::domain`; this layer only decides
//! the order in which it reaches the disk.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, FrontendScaffold};

pub use error::ApplicationError;
