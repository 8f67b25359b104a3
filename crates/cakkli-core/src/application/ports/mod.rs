//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cakkli-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, file reads and atomic writes
//!   - `FrontendScaffold`: the external frontend skeleton generator

pub mod output;

pub use output::{Filesystem, FrontendScaffold};

#[cfg(test)]
pub use output::{MockFilesystem, MockFrontendScaffold};
