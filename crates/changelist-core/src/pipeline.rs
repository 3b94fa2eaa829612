//! Changelog generation.

use tracing::debug;

use crate::classify::{IgnoreSet, classify};
use crate::format::Format;
use crate::header::{render_header, today};
use crate::{CoreError, CoreResult};

/// Turns commit subjects into a rendered changelog.
///
/// Holds everything a run needs besides the commits and the release, so the
/// same generator can render several releases with identical settings.
#[derive(Debug, Clone)]
pub struct ChangelogGenerator {
    format: Format,
    ignore: IgnoreSet,
    release_name: Option<String>,
    date: String,
}

impl ChangelogGenerator {
    /// Creates a generator for the given format, dated today.
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ignore: IgnoreSet::default(),
            release_name: None,
            date: today(),
        }
    }

    /// Sets the commit messages to leave out.
    #[must_use]
    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// Sets the release codename.
    #[must_use]
    pub fn with_release_name(mut self, name: impl Into<String>) -> Self {
        self.release_name = Some(name.into());
        self
    }

    /// Overrides the release date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Returns the output format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Renders the header followed by one section per category.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoCommits`] if `commits` is empty.
    pub fn generate<S: AsRef<str>>(&self, commits: &[S], release: &str) -> CoreResult<String> {
        if commits.is_empty() {
            return Err(CoreError::NoCommits);
        }

        let ignore = (!self.ignore.is_empty()).then_some(&self.ignore);
        let classification = classify(commits, ignore);
        debug!(
            commits = commits.len(),
            categories = classification.len(),
            format = %self.format,
            "classified commits"
        );

        let mut output = render_header(
            self.format.header(),
            release,
            self.release_name.as_deref(),
            &self.date,
        );
        output.push_str(&self.format.render(&classification));
        Ok(output)
    }
}

/// Renders a changelog for `release`, dated today.
///
/// `ignore_list` is comma-separated and `format_name` is resolved through
/// [`Format`]'s `FromStr` implementation.
///
/// # Errors
///
/// Returns an error if the format is unknown or `commits` is empty.
pub fn generate<S: AsRef<str>>(
    commits: &[S],
    ignore_list: Option<&str>,
    format_name: &str,
    release: &str,
    release_name: Option<&str>,
) -> CoreResult<String> {
    let mut generator = ChangelogGenerator::new(format_name.parse()?);
    if let Some(list) = ignore_list {
        generator = generator.with_ignore(IgnoreSet::parse(list));
    }
    if let Some(name) = release_name {
        generator = generator.with_release_name(name);
    }
    generator.generate(commits, release)
}
