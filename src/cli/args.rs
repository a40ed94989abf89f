//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::index::DuplicatePolicy;

/// Navigation index validator for markdown sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: sitenav.toml, searched upward)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "sitenav.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate sidebar and nav links against the content documents
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the validated navigation model as JSON
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Show every sidebar location that links to a document
    #[command(visible_alias = "l")]
    Lookup {
        #[command(flatten)]
        args: LookupArgs,
    },

    /// List the content documents found on disk
    Docs,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Override the duplicate-target policy
    #[arg(short, long, value_enum)]
    pub duplicates: Option<DuplicatePolicy>,

    /// Check top navigation bar links
    #[arg(
        short,
        long,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub nav: Option<bool>,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Only output the sidebar tree
    #[arg(short, long)]
    pub sidebar_only: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Lookup command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LookupArgs {
    /// Document id or link (e.g., `posts/gpt`, `/posts/gpt`, `posts/gpt.md`)
    pub doc: String,

    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,
}
