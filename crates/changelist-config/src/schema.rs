//! Configuration schema.

use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Release configuration.
    #[serde(default)]
    pub release: ReleaseConfig,
}

/// Changelog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangelogConfig {
    /// Output format name (`markdown` or `chat`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Commit messages to hide from the changelog.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File the changelog is prepended to when `--output` has no value.
    #[serde(default = "default_changelog_output")]
    pub output: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            ignore: Vec::new(),
            output: default_changelog_output(),
        }
    }
}

fn default_format() -> String {
    "markdown".to_string()
}

fn default_changelog_output() -> String {
    "CHANGELOG.md".to_string()
}

/// Release configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseConfig {
    /// Look up a random codename for every release.
    #[serde(default)]
    pub codename: bool,
}
