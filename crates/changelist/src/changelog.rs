//! Changelog generation command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use changelist_config::{Config, ConfigError, find_and_load_config_from};
use changelist_core::{ChangelogGenerator, Format, IgnoreSet, prepend_to_file, resolve_release};
use changelist_git::Repository;

use crate::cli::Cli;
use crate::codename;

/// Resolves and checks the repository directory.
fn base_dir(base: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let Some(base) = base else {
        debug!(dir = %cwd.display(), "using the current working directory as the base");
        return Ok(cwd);
    };

    let base = cwd.join(base);
    if !base.exists() {
        bail!("no such file or directory: {}", base.display());
    }
    if !base.is_dir() {
        bail!("not a directory: {}", base.display());
    }

    debug!(dir = %base.display(), "using base directory");
    Ok(base)
}

/// Loads `changelist.toml`, falling back to defaults when there is none.
fn load_config(base: &Path) -> Result<Config> {
    match find_and_load_config_from(base) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => Ok(Config::default()),
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

/// Picks the ignore list from the command line or the configuration.
fn ignore_set(cli: &Cli, config: &Config) -> IgnoreSet {
    match &cli.ignore {
        Some(list) => IgnoreSet::parse(list),
        None => config.changelog.ignore.iter().collect(),
    }
}

/// Returns where to prepend the changelog, if anywhere.
fn output_path(cli: &Cli, config: &Config, base: &Path) -> Option<PathBuf> {
    let file = cli.output.as_ref()?;
    let file = file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.changelog.output));
    Some(base.join(file))
}

/// Removes one trailing line break.
fn strip_eof(text: &str) -> &str {
    text.strip_suffix('\n')
        .map_or(text, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

/// Runs the changelog command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(cli: Cli) -> Result<()> {
    let base = base_dir(cli.base.as_deref())?;
    let config = load_config(&base)?;

    let format_name = cli.format.as_deref().unwrap_or(&config.changelog.format);
    let format: Format = format_name.parse()?;
    info!(%format, "using format");

    let ignore = ignore_set(&cli, &config);
    if !ignore.is_empty() {
        info!(count = ignore.len(), "ignoring commit messages");
    }

    let repo = Repository::discover_from(&base).context("failed to open git repository")?;
    info!(repo = %repo.path().display(), "gathering commits");
    let subjects = repo
        .commit_subjects(cli.commitish.as_deref())
        .context("failed to read commits")?;
    info!(count = subjects.len(), "found commits");

    let release = resolve_release(cli.release.as_deref(), &base);

    let mut generator = ChangelogGenerator::new(format).with_ignore(ignore);
    if (cli.name || config.release.codename)
        && let Some(name) = codename::lookup()
    {
        generator = generator.with_release_name(name);
    }

    let changelog = generator.generate(&subjects, &release)?;

    match output_path(&cli, &config, &base) {
        Some(path) => {
            prepend_to_file(&path, &changelog)
                .with_context(|| format!("failed to write changelog to {}", path.display()))?;
            info!(path = %path.display(), "changelog has been prepended");
        }
        None => println!("{}", strip_eof(&changelog)),
    }

    Ok(())
}
