//! The fixed file catalogue of a generated project.
//!
//! Pure data: every template is a function of [`ProjectConfig`](crate::domain::ProjectConfig)
//! and nothing here touches the disk. The orchestrator walks the three passes
//! in order: client, server, root.

pub mod client;
pub mod root;
pub mod server;

/// Command line handed to the frontend scaffold runner, relative to the project root.
pub const FRONTEND_SCAFFOLD_ARGS: [&str; 6] =
    ["create", "vite@latest", client::PACKAGE_DIR, "--", "--template", "react-ts"];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn no_two_templates_share_a_path() {
        let mut seen = HashSet::new();
        for t in client::templates()
            .into_iter()
            .chain(server::templates())
            .chain(root::templates())
        {
            assert!(seen.insert(t.path().clone()), "duplicate {}", t.path());
        }
    }

    #[test]
    fn directory_plans_are_valid() {
        client::directories().validate().unwrap();
        server::directories().validate().unwrap();
    }

    #[test]
    fn scaffold_targets_client_dir() {
        assert_eq!(FRONTEND_SCAFFOLD_ARGS[2], "client");
        assert_eq!(FRONTEND_SCAFFOLD_ARGS[5], "react-ts");
    }
}
