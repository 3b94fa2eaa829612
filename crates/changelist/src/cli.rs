//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::changelog;

/// Generate release notes from categorized git commit messages.
///
/// Commits prefixed with `<category>:` are grouped under that category,
/// the rest under "Others". Commits that only mention a version number are
/// left out.
#[derive(Debug, Parser)]
#[command(name = "changelist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the git repository (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Output format: markdown or chat
    #[arg(short, long, value_name = "NAME", visible_alias = "preset", short_alias = 'p')]
    pub format: Option<String>,

    /// Commit range to read (default: <latest tag>..HEAD)
    #[arg(short, long, value_name = "RANGE")]
    pub commitish: Option<String>,

    /// Version of the upcoming release (default: from Cargo.toml or package.json)
    #[arg(short, long, value_name = "VERSION")]
    pub release: Option<String>,

    /// Comma-separated commit messages to leave out
    #[arg(short, long, value_name = "LIST")]
    pub ignore: Option<String>,

    /// Prepend the changelog to a file (default: CHANGELOG.md)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Option<PathBuf>>,

    /// Add a random codename to the release
    #[arg(short = 'N', long)]
    pub name: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        changelog::run(self)
    }
}
