//! sitenav - validate and render the navigation index of a markdown site.

mod cli;
mod config;
mod content;
mod index;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Check { .. } => cli::check::check_site(&config),
        Commands::Render { args } => cli::render::render_site(args, &config),
        Commands::Lookup { args } => cli::lookup::lookup_doc(args, &config),
        Commands::Docs => cli::docs::list_docs(&config),
    }
}
