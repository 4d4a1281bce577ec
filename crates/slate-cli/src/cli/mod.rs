//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "slate",
    bin_name = "slate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Theme scaffolding and build tooling",
    long_about = "Slate creates new theme projects from starter repositories \
                  or local directories, and builds them with the ecosystem bundler.",
    after_help = "EXAMPLES:\n\
        \x20 slate new my-theme\n\
        \x20 slate new my-theme shopify/starter-theme#v1.0\n\
        \x20 slate new my-theme ../existing-theme --skip-install\n\
        \x20 slate build --mode production",
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
    /// Create a new theme project from a starter.
    #[command(
        visible_alias = "n",
        about = "Create a new theme project",
        after_help = "EXAMPLES:\n\
            \x20 slate new my-theme\n\
            \x20 slate new my-theme shopify/starter-theme\n\
            \x20 slate new my-theme shopify/starter-theme#123456\n\
            \x20 slate new my-theme ./local-starter --skip-install"
    )]
    New(NewArgs),

    /// Build the theme in the current directory.
    #[command(
        visible_alias = "b",
        about = "Build the theme with the bundler",
        after_help = "EXAMPLES:\n\
            \x20 slate build\n\
            \x20 slate build --mode development"
    )]
    Build(BuildArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 slate completions bash > ~/.local/share/bash-completion/completions/slate\n\
            \x20 slate completions zsh  > ~/.zfunc/_slate\n\
            \x20 slate completions fish > ~/.config/fish/completions/slate.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `slate new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Theme name. The project is created at `./<name>`.
    #[arg(value_name = "NAME", help = "Theme name")]
    pub name: String,

    /// Starter source.  Defaults to the configured starter repository.
    #[arg(
        value_name = "STARTER",
        help = "Starter: owner/repo[#ref] or a local directory"
    )]
    pub starter: Option<String>,

    /// Skip the dependency-installation step.
    #[arg(long = "skip-install", help = "Skip installing theme dependencies")]
    pub skip_install: bool,
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `slate build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Bundler mode.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value = "production",
        help = "Build mode"
    )]
    pub mode: BuildMode,
}

/// Bundler mode, passed explicitly into the bundler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BuildMode {
    /// Also accepted as `dev`.
    #[value(alias = "dev")]
    Development,
    /// Also accepted as `prod`.
    #[value(alias = "prod")]
    Production,
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `slate completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
