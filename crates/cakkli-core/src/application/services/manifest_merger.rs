use std::path::Path;

use tracing::{debug, info};

use crate::{
    application::ports::Filesystem,
    domain::{
        ManifestPatch,
        entities::{parse_manifest, to_stable_string},
    },
    error::CakkliResult,
};

/// Outcome of applying one [`ManifestPatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// An existing manifest was merged.
    Merged,
    /// No manifest existed; the patch became the file.
    Created,
    /// The patch is conditional and the target was absent.
    Skipped,
}

/// Reads, deep-merges and rewrites JSON manifests.
pub struct ManifestMerger<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestMerger<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Apply `patch` relative to `root`.
    ///
    /// Malformed JSON in an existing manifest is an error; the file is left
    /// untouched.
    pub fn apply(&self, root: &Path, patch: &ManifestPatch) -> CakkliResult<MergeOutcome> {
        let path = root.join(patch.target().as_path());

        let existing = if self.filesystem.exists(&path) {
            let text = self.filesystem.read_to_string(&path)?;
            Some(parse_manifest(patch.target(), &text)?)
        } else if patch.is_conditional() {
            debug!(manifest = %patch.target(), "Manifest absent, patch skipped");
            return Ok(MergeOutcome::Skipped);
        } else {
            None
        };

        let outcome = if existing.is_some() {
            MergeOutcome::Merged
        } else {
            MergeOutcome::Created
        };

        let merged = patch.apply(existing)?;
        self.filesystem.write_file(&path, &to_stable_string(&merged))?;
        info!(manifest = %patch.target(), ?outcome, "Manifest patched");
        Ok(outcome)
    }
}
