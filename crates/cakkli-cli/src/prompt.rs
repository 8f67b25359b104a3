//! Collects a [`ProjectConfig`] from flags, prompts and config defaults.
//!
//! Flags always win. A value missing from the flags is asked for when the
//! session is interactive, otherwise taken from the configuration defaults.

use cakkli_core::{
    domain::{ProjectConfig, ProjectName, StyleLibrary},
    error::CakkliError,
};
use tracing::debug;

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Source of answers for values missing from the command line.
///
/// `Ok(None)` means the user aborted the prompt.
pub trait Prompter {
    fn project_name(&self, initial: &str) -> CliResult<Option<String>>;
    fn style_library(&self, default: StyleLibrary) -> CliResult<Option<StyleLibrary>>;
}

/// Never asks; answers with the offered default.
pub struct Defaults;

impl Prompter for Defaults {
    fn project_name(&self, initial: &str) -> CliResult<Option<String>> {
        Ok(Some(initial.to_string()))
    }

    fn style_library(&self, default: StyleLibrary) -> CliResult<Option<StyleLibrary>> {
        Ok(Some(default))
    }
}

/// Asks on the terminal.
#[cfg(feature = "interactive")]
pub struct Terminal;

#[cfg(feature = "interactive")]
impl Prompter for Terminal {
    fn project_name(&self, initial: &str) -> CliResult<Option<String>> {
        let answer = dialoguer::Input::<String>::new()
            .with_prompt("Project name")
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text();
        answered(answer)
    }

    fn style_library(&self, default: StyleLibrary) -> CliResult<Option<StyleLibrary>> {
        let items: Vec<&str> = StyleLibrary::ALL.iter().map(|s| s.display_name()).collect();
        let default_idx = StyleLibrary::ALL
            .iter()
            .position(|s| *s == default)
            .unwrap_or(0);

        let choice = dialoguer::Select::new()
            .with_prompt("Style library")
            .items(&items)
            .default(default_idx)
            .interact_opt();

        Ok(answered(choice)?
            .flatten()
            .and_then(|idx| StyleLibrary::ALL.get(idx).copied()))
    }
}

/// Ctrl-C surfaces as an interrupted read and counts as an abort. Any other
/// terminal failure is a real I/O error.
#[cfg(feature = "interactive")]
fn answered<T>(result: dialoguer::Result<T>) -> CliResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => match std::io::Error::from(e) {
            e if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
            e => Err(CliError::IoError {
                message: "Failed to read prompt answer".to_string(),
                source: e,
            }),
        },
    }
}

/// The prompter for this session.
pub fn for_session(args: &NewArgs) -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if !args.yes && std::io::stdin().is_terminal() {
            return Box::new(Terminal);
        }
    }
    #[cfg(not(feature = "interactive"))]
    let _ = args;

    Box::new(Defaults)
}

/// Resolve the full configuration for `cakkli new`.
///
/// Empty or aborted answers are [`CliError::Cancelled`]; nothing has touched
/// the filesystem at this point.
pub fn resolve_config(
    args: &NewArgs,
    config: &AppConfig,
    prompter: &dyn Prompter,
) -> CliResult<ProjectConfig> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompter
            .project_name(&config.defaults.project_name)?
            .ok_or(CliError::Cancelled)?,
    };
    if name.trim().is_empty() {
        return Err(CliError::Cancelled);
    }
    let name = ProjectName::new(name).map_err(CakkliError::from)?;

    let style = match args.style_library() {
        Some(style) => style,
        None => prompter
            .style_library(default_style(config)?)?
            .ok_or(CliError::Cancelled)?,
    };

    debug!(project = %name, style = %style, "Configuration resolved");
    Ok(ProjectConfig::new(name, style))
}

/// `defaults.style_library`, or shadcn/ui when unset.
fn default_style(config: &AppConfig) -> CliResult<StyleLibrary> {
    match &config.defaults.style_library {
        None => Ok(StyleLibrary::Shadcn),
        Some(raw) => raw.parse().map_err(|e| CliError::InvalidInput {
            message: format!("defaults.style_library = '{raw}' is not a style library"),
            source: Some(Box::new(e)),
        }),
    }
}
