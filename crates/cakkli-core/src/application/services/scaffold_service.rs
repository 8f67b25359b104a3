//! Scaffold Service - the generation orchestrator.
//!
//! One run is a strictly sequential pass over fixed stages:
//! 1. Guard the project root (nothing is written before this passes)
//! 2. Create the root
//! 3. Run the external frontend scaffold inside it
//! 4. Patch the client manifests
//! 5. Plan client directories and write client files
//! 6. Plan server directories and write server files
//! 7. Write root-level files
//!
//! Any failure ends the run. Nothing is rolled back: the guard is the only
//! safety net, so a failed run leaves a partial tree that blocks a rerun
//! under the same name.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, FrontendScaffold},
        services::{
            CollisionGuard, DirectoryPlanner, ManifestMerger, MergeOutcome, TemplateWriter,
        },
    },
    domain::{
        ProjectConfig,
        catalog::{self, client, server},
    },
    error::{CakkliError, CakkliResult, Stage},
};

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories_created: usize,
    pub files_written: usize,
    pub manifests_patched: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    frontend: Box<dyn FrontendScaffold>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use cakkli_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(frontend),   // impl FrontendScaffold
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, frontend: Box<dyn FrontendScaffold>) -> Self {
        Self {
            filesystem,
            frontend,
        }
    }

    /// Generate a project named after `config` inside `parent`.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            style = %config.style(),
            parent = %parent.display()
        )
    )]
    pub fn generate(&self, config: &ProjectConfig, parent: &Path) -> CakkliResult<ScaffoldReport> {
        let fs = self.filesystem.as_ref();
        let root = parent.join(config.name().as_str());
        let mut report = ScaffoldReport {
            root: root.clone(),
            directories_created: 0,
            files_written: 0,
            manifests_patched: 0,
        };

        stage(Stage::Guard, || Ok(CollisionGuard::new(fs).check(&root)?))?;

        info!(root = %root.display(), "Creating project");
        stage(Stage::CreateRoot, || fs.create_dir(&root))?;
        report.directories_created += 1;

        info!(command = %self.frontend.describe(), "Setting up frontend");
        stage(Stage::FrontendScaffold, || self.frontend.scaffold(&root))?;

        let merger = ManifestMerger::new(fs);
        let planner = DirectoryPlanner::new(fs);
        let writer = TemplateWriter::new(fs, config);

        stage(Stage::ClientManifest, || {
            for patch in client::manifest_patches() {
                if merger.apply(&root, &patch)? != MergeOutcome::Skipped {
                    report.manifests_patched += 1;
                }
            }
            Ok(())
        })?;

        stage(Stage::ClientFiles, || {
            report.directories_created += planner.plan(&root, &client::directories())?.len();
            report.files_written += writer.write_all(&root, &client::templates())?.len();
            Ok(())
        })?;

        info!("Setting up backend");
        stage(Stage::ServerFiles, || {
            report.directories_created += planner.plan(&root, &server::directories())?.len();
            report.files_written += writer.write_all(&root, &server::templates())?.len();
            Ok(())
        })?;

        stage(Stage::RootFiles, || {
            report.files_written += writer.write_all(&root, &catalog::root::templates())?.len();
            Ok(())
        })?;

        info!(
            directories = report.directories_created,
            files = report.files_written,
            manifests = report.manifests_patched,
            "Project created"
        );
        Ok(report)
    }
}

/// Run one stage, labelling any failure with it.
fn stage<T>(stage: Stage, run: impl FnOnce() -> CakkliResult<T>) -> CakkliResult<T> {
    run().map_err(|e| CakkliError::at(stage, e))
}
