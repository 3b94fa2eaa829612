//! changelist CLI - Generate release notes from categorized commit messages.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod changelog;
mod cli;
mod codename;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries the changelog
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
