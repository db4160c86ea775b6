//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No blog logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `postgen` runs the interactive post generator in the
/// current directory.
#[derive(Debug, Parser)]
#[command(
    name    = "postgen",
    bin_name = "postgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{270d} Blog post and category scaffolding",
    long_about = "postgen finds the blog next to you, asks a few questions and \
                  writes a new post (and, if needed, a new category) with \
                  front matter filled in.",
    after_help = "EXAMPLES:\n\
        \x20 postgen                # interactive post generation\n\
        \x20 postgen -v             # same, with progress logs\n\
        \x20 postgen init           # write the default configuration\n\
        \x20 postgen completions zsh > ~/.zfunc/_postgen",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; none runs the generator.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a postgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 postgen init            # default location\n\
            \x20 postgen init --force    # overwrite an existing file\n\
            \x20 postgen -c ./postgen.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 postgen completions bash > ~/.local/share/bash-completion/completions/postgen\n\
            \x20 postgen completions zsh  > ~/.zfunc/_postgen\n\
            \x20 postgen completions fish > ~/.config/fish/completions/postgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `postgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `postgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
