pub mod common;
pub mod directory_spec;
pub mod manifest;
pub mod project_config;
pub mod template;

pub use common::RelativePath;
pub use directory_spec::DirectorySpec;
pub use manifest::{ManifestPatch, deep_merge, parse_manifest, to_stable_string};
pub use project_config::ProjectConfig;
pub use template::{RenderContext, TemplateBody, TemplateFile};
