//! cakkli core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the cakkli
//! full-stack project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           cakkli-cli (CLI)              │
//! │   (prompts, config, resolves the run)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService → Guard, Planner,     │
//! │   ManifestMerger, TemplateWriter)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, FrontendScaffold)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      cakkli-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  ViteScaffold)                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cakkli_core::prelude::*;
//!
//! let config = ProjectConfig::new(ProjectName::new("demo")?, StyleLibrary::Mantine);
//! let service = ScaffoldService::new(Box::new(filesystem), Box::new(frontend));
//! let report = service.generate(&config, Path::new("."))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{Filesystem, FrontendScaffold},
    };
    pub use crate::domain::{ProjectConfig, ProjectName, StyleLibrary};
    pub use crate::error::{CakkliError, CakkliResult, FailureKind, Stage};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
