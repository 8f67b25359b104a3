//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CAKKLI_` prefix, `__` between sections,
//!    e.g. `CAKKLI_DEFAULTS__STYLE_LIBRARY=mantine`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Project name offered when the user gives none.
pub const DEFAULT_PROJECT_NAME: &str = "my-fullstack-app";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// External frontend tool settings.
    pub frontend: FrontendConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// `shadcn` or `mantine`; prompted for when unset.
    pub style_library: Option<String>,
    pub project_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            style_library: None,
            project_name: DEFAULT_PROJECT_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Package runner used for `create vite@latest`.
    pub runner: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            runner: "npm".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// `config_file` is the path passed via `--config`. A missing file is not
    /// an error: the remaining layers still apply.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::active_path(config_file);
        Self::load_from(&path, Environment::with_prefix("CAKKLI"))
    }

    fn load_from(path: &Path, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("defaults.project_name", defaults.defaults.project_name)?
            .set_default("frontend.runner", defaults.frontend.runner)?
            .set_default("output.no_color", defaults.output.no_color)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cakkli.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "cakkli", "cakkli")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cakkli.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_path(explicit: Option<&PathBuf>) -> PathBuf {
        explicit.cloned().unwrap_or_else(Self::config_path)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
