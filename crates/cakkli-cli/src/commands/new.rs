//! Implementation of the `cakkli new` command.
//!
//! Responsibility: turn CLI arguments into a `ProjectConfig`, wire the real
//! adapters into the core `ScaffoldService`, and display results. No
//! generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use cakkli_adapters::{LocalFilesystem, ViteScaffold};
use cakkli_core::{
    application::{FrontendScaffold, ScaffoldReport, ScaffoldService},
    domain::{ProjectConfig, StyleLibrary},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

/// Execute the `cakkli new` command.
///
/// 1. Resolve name and style (flags, then prompts or config defaults)
/// 2. Build the service over the local disk and the configured runner
/// 3. Generate
/// 4. Print a summary and next steps
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve configuration
    let prompter = prompt::for_session(&args);
    let project = prompt::resolve_config(&args, &config, prompter.as_ref())?;
    let parent = parent_dir(args.dir.as_deref());

    // 2. Wire adapters
    // Plain `npm` resolves to `npm.cmd` on Windows.
    let frontend = match config.frontend.runner.as_str() {
        "npm" => ViteScaffold::new(),
        runner => ViteScaffold::with_runner(runner),
    };
    output.header(&format!(
        "Creating '{}' with {}...",
        project.name(),
        project.style().display_name()
    ))?;
    output.info(&format!("Running {}", frontend.describe()))?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(frontend));

    // 3. Generate
    info!(project = %project.name(), parent = %parent.display(), "Generation started");
    let report = service.generate(&project, &parent)?;
    info!(root = %report.root.display(), "Generation completed");

    // 4. Success + next steps
    output.success(&format!("Project '{}' created!", project.name()))?;
    output.print(&summary(&report))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        for step in next_steps(&project) {
            output.step(&step)?;
        }
    }

    Ok(())
}

fn parent_dir(dir: Option<&Path>) -> PathBuf {
    dir.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn summary(report: &ScaffoldReport) -> String {
    format!(
        "  {} directories, {} files, {} manifests patched in {}",
        report.directories_created,
        report.files_written,
        report.manifests_patched,
        report.root.display()
    )
}

/// Commands to run after generation, in order.
pub fn next_steps(project: &ProjectConfig) -> Vec<String> {
    let mut steps = vec![
        format!("cd {}", project.name()),
        "npm run install:all".to_string(),
        "npm run prepare".to_string(),
    ];
    if project.style() == StyleLibrary::Shadcn {
        steps.push("cd client && npx shadcn@latest init && cd ..".to_string());
    }
    steps.push("npm run dev".to_string());
    steps.push("npm test".to_string());
    steps
}

// ── Tests ─────────────────────────────────────────────────────────────────────
