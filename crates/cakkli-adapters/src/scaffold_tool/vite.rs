//! `npm create vite@latest client -- --template react-ts`, run in the project root.

use std::path::Path;
use std::process::{Command, Stdio};

use cakkli_core::{
    application::{ApplicationError, ports::FrontendScaffold},
    domain::catalog::FRONTEND_SCAFFOLD_ARGS,
    error::CakkliResult,
};
use tracing::{debug, info};

#[cfg(windows)]
const DEFAULT_RUNNER: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_RUNNER: &str = "npm";

/// Runs the Vite React/TypeScript template through a package runner.
///
/// Standard streams are inherited so the user sees the tool's own output and
/// can answer its prompts. The call blocks until the tool exits; there is no
/// timeout.
#[derive(Debug, Clone)]
pub struct ViteScaffold {
    runner: String,
}

impl ViteScaffold {
    /// Use the platform's `npm`.
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_RUNNER)
    }

    /// Use another runner binary; the arguments stay fixed.
    pub fn with_runner(runner: impl Into<String>) -> Self {
        Self {
            runner: runner.into(),
        }
    }

    fn command(&self, project_root: &Path) -> Command {
        let mut command = Command::new(&self.runner);
        command
            .args(FRONTEND_SCAFFOLD_ARGS)
            .current_dir(project_root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl Default for ViteScaffold {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontendScaffold for ViteScaffold {
    fn scaffold(&self, project_root: &Path) -> CakkliResult<()> {
        let description = self.describe();
        info!(command = %description, cwd = %project_root.display(), "Running frontend scaffold");

        let status = self.command(project_root).status().map_err(|e| {
            ApplicationError::ScaffoldToolUnavailable {
                command: description.clone(),
                reason: e.to_string(),
            }
        })?;

        if !status.success() {
            return Err(ApplicationError::ScaffoldToolFailed {
                command: description,
                code: status.code(),
            }
            .into());
        }

        debug!("Frontend scaffold finished");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.runner, FRONTEND_SCAFFOLD_ARGS.join(" "))
    }
}
