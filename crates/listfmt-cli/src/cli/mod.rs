//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No rendering logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "listfmt",
    bin_name = "listfmt",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render lists through runtime or compile-time strategies",
    long_about = "listfmt renders a list of items as bullets or tags, either through \
                  a strategy picked at runtime (trait object) or one fixed at compile \
                  time (generic parameter).",
    after_help = "EXAMPLES:\n\
        \x20 listfmt demo\n\
        \x20 listfmt render --notation tagged one two three\n\
        \x20 listfmt render --dispatch static --notation bullet apples pears\n\
        \x20 listfmt completions bash > /usr/share/bash-completion/completions/listfmt",
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
    /// Run the scripted demonstration of both dispatch styles.
    #[command(about = "Render the sample list in every notation, both ways")]
    Demo,

    /// Render items in one notation.
    #[command(
        visible_alias = "r",
        about = "Render a list",
        after_help = "EXAMPLES:\n\
            \x20 listfmt render foo bar baz\n\
            \x20 listfmt render --notation html foo bar\n\
            \x20 listfmt render -d static -n tagged foo"
    )]
    Render(RenderArgs),

    /// List supported notations.
    #[command(visible_alias = "ls", about = "List supported notations")]
    Notations,

    /// Print the effective configuration.
    #[command(about = "Show effective configuration as TOML")]
    Config,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 listfmt completions bash > ~/.local/share/bash-completion/completions/listfmt\n\
            \x20 listfmt completions zsh  > ~/.zfunc/_listfmt\n\
            \x20 listfmt completions fish > ~/.config/fish/completions/listfmt.fish"
    )]
    Completions(CompletionsArgs),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `listfmt render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Items to render, in order.  Defaults to the sample list.
    #[arg(value_name = "ITEM", help = "Items to render")]
    pub items: Vec<String>,

    /// Notation name (`bullet`, `tagged`, or an alias).
    ///
    /// Kept as a free string so unknown names are reported by the core
    /// notation parser.
    #[arg(
        short = 'n',
        long = "notation",
        value_name = "NOTATION",
        help = "List notation (bullet, tagged, markdown, html)"
    )]
    pub notation: Option<String>,

    /// How the processor reaches its strategy.
    #[arg(
        short = 'd',
        long = "dispatch",
        value_name = "DISPATCH",
        value_enum,
        help = "Strategy binding"
    )]
    pub dispatch: Option<Dispatch>,
}

/// Strategy binding used by a processor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// `Box<dyn ListStrategy>`, selected at runtime.
    #[default]
    Dynamic,
    /// Generic type parameter, fixed at compile time.
    Static,
}

impl std::fmt::Display for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Dynamic => "dynamic",
            Self::Static => "static",
        })
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `listfmt completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
