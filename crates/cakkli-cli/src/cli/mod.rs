//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use cakkli_core::domain::StyleLibrary;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cakkli",
    bin_name = "cakkli",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Full-stack TypeScript project generator",
    long_about = "cakkli generates a React + Vite client and an Express server \
                  with a shared root workspace, ready for `npm run dev`.",
    after_help = "EXAMPLES:\n\
        \x20 cakkli new my-app --shadcn\n\
        \x20 cakkli new my-app --style mantine --dir ~/projects\n\
        \x20 cakkli new                       # prompts for everything\n\
        \x20 cakkli completions bash > /usr/share/bash-completion/completions/cakkli",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new full-stack project.
    #[command(
        visible_alias = "n",
        about = "Create a new full-stack project",
        after_help = "EXAMPLES:\n\
            \x20 cakkli new my-app --shadcn\n\
            \x20 cakkli new my-app --mantine --yes\n\
            \x20 cakkli new my-app --style shadcn --dir ../sandbox"
    )]
    New(NewArgs),

    /// Initialise a cakkli configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 cakkli init                       # default location\n\
            \x20 cakkli init --config ./cakkli.toml\n\
            \x20 cakkli init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cakkli completions bash > ~/.local/share/bash-completion/completions/cakkli\n\
            \x20 cakkli completions zsh  > ~/.zfunc/_cakkli\n\
            \x20 cakkli completions fish > ~/.config/fish/completions/cakkli.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the cakkli configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cakkli config get defaults.style_library\n\
            \x20 cakkli config list\n\
            \x20 cakkli config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `cakkli new`.
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("style_choice").args(["shadcn", "mantine", "style"])))]
pub struct NewArgs {
    /// Name of the project directory. Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name (prompted when omitted)")]
    pub name: Option<String>,

    /// Use shadcn/ui for UI components.
    #[arg(long = "shadcn", help = "Use shadcn/ui")]
    pub shadcn: bool,

    /// Use Mantine for UI components.
    #[arg(long = "mantine", help = "Use Mantine")]
    pub mantine: bool,

    /// Style library, as an alternative to the shorthand flags.
    #[arg(
        short = 's',
        long = "style",
        value_name = "LIBRARY",
        value_enum,
        help = "UI style library"
    )]
    pub style: Option<StyleArg>,

    /// Parent directory of the generated project.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PARENT",
        help = "Parent directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Never prompt; fill missing values from the configuration defaults.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and use defaults")]
    pub yes: bool,
}

impl NewArgs {
    /// The style library chosen on the command line, if any.
    pub fn style_library(&self) -> Option<StyleLibrary> {
        if self.shadcn {
            Some(StyleLibrary::Shadcn)
        } else if self.mantine {
            Some(StyleLibrary::Mantine)
        } else {
            self.style.map(Into::into)
        }
    }
}

/// Style library accepted by `--style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StyleArg {
    /// Also accepted as `shadcn-ui`.
    #[value(alias = "shadcn-ui")]
    Shadcn,
    Mantine,
}

impl From<StyleArg> for StyleLibrary {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Shadcn => StyleLibrary::Shadcn,
            StyleArg::Mantine => StyleLibrary::Mantine,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cakkli init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cakkli completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cakkli config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.style_library`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
