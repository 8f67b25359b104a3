use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectConfig, RenderContext, TemplateFile},
    error::CakkliResult,
};

/// Renders templates in memory and writes each one in a single step.
pub struct TemplateWriter<'a> {
    filesystem: &'a dyn Filesystem,
    config: &'a ProjectConfig,
    context: RenderContext,
}

impl<'a> TemplateWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, config: &'a ProjectConfig) -> Self {
        Self {
            filesystem,
            config,
            context: RenderContext::new(config),
        }
    }

    /// Write all `templates` under `root`, in order.
    ///
    /// A missing parent directory means the directory plan is wrong; it is
    /// reported instead of being papered over.
    pub fn write_all(&self, root: &Path, templates: &[TemplateFile]) -> CakkliResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(templates.len());
        for template in templates {
            written.push(self.write(root, template)?);
        }
        Ok(written)
    }

    pub fn write(&self, root: &Path, template: &TemplateFile) -> CakkliResult<PathBuf> {
        let path = root.join(template.path().as_path());

        let parent_ok = path.parent().is_some_and(|p| self.filesystem.exists(p));
        if !parent_ok {
            return Err(ApplicationError::MissingParentDirectory { path }.into());
        }

        let content = template.render(self.config, &self.context);
        self.filesystem.write_file(&path, &content)?;
        debug!(file = %template.path(), bytes = content.len(), "Wrote file");
        Ok(path)
    }
}
