//! Application services - orchestrate use cases.
//!
//! [`ScaffoldService`] is the only public entry point; the other services are
//! the single-purpose steps it sequences.

pub mod collision_guard;
pub mod directory_planner;
pub mod manifest_merger;
pub mod scaffold_service;
pub mod template_writer;

#[cfg(test)]
pub(crate) mod fake;

pub use collision_guard::CollisionGuard;
pub use directory_planner::DirectoryPlanner;
pub use manifest_merger::{ManifestMerger, MergeOutcome};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
pub use template_writer::TemplateWriter;
