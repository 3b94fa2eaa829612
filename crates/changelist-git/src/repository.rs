//! Git repository wrapper.

use std::path::Path;

use git2::{Oid, RevparseMode, Repository as Git2Repo, Revwalk, Sort};
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens the repository containing the given path.
    ///
    /// The path may point anywhere inside the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository contains the path.
    pub fn discover_from(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns all tags in the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be read.
    pub fn tags(&self) -> GitResult<Vec<String>> {
        let tags = self.inner.tag_names(None)?;
        Ok(tags.iter().flatten().map(String::from).collect())
    }

    /// Returns the tag pointing at the most recently committed tagged commit.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be read.
    pub fn latest_tag(&self) -> GitResult<Option<String>> {
        let mut latest: Option<(i64, String)> = None;

        for tag in self.tags()? {
            let Ok(object) = self.inner.revparse_single(&format!("refs/tags/{tag}")) else {
                continue;
            };
            let Ok(commit) = object.peel_to_commit() else {
                continue;
            };

            let seconds = commit.time().seconds();
            if latest.as_ref().is_none_or(|(best, _)| seconds > *best) {
                latest = Some((seconds, tag));
            }
        }

        Ok(latest.map(|(_, tag)| tag))
    }

    /// Returns the subjects of the commits in the given range, newest first.
    ///
    /// Without a range, the walk covers `<latest tag>..HEAD`, or the whole
    /// history of `HEAD` when the repository has no tags. Merge commits are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the range cannot be resolved or is empty.
    pub fn commit_subjects(&self, range: Option<&str>) -> GitResult<Vec<String>> {
        let range = match range.map(str::trim).filter(|r| !r.is_empty()) {
            Some(range) => Some(range.to_string()),
            None => self.latest_tag()?.map(|tag| format!("{tag}..HEAD")),
        };

        debug!(range = ?range, "walking commits");

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;

        match range {
            Some(range) => self.push_range(&mut revwalk, &range)?,
            None => revwalk.push_head()?,
        }

        let mut subjects = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            if commit.parent_count() > 1 {
                continue;
            }
            // Subjects in legacy encodings keep their prefix
            let summary = commit.summary_bytes().unwrap_or_default();
            subjects.push(String::from_utf8_lossy(summary).into_owned());
        }

        if subjects.is_empty() {
            return Err(GitError::NoCommits);
        }

        debug!(count = subjects.len(), "collected commit subjects");
        Ok(subjects)
    }

    /// Configures the walk for a revision expression.
    fn push_range(&self, revwalk: &mut Revwalk<'_>, range: &str) -> GitResult<()> {
        let spec = self
            .inner
            .revparse(range)
            .map_err(|_| GitError::BadRevision(range.to_string()))?;

        let from = spec.from().map(|o| o.peel_to_commit().map(|c| c.id())).transpose()?;
        let to = spec.to().map(|o| o.peel_to_commit().map(|c| c.id())).transpose()?;

        if spec.mode().contains(RevparseMode::SINGLE) {
            let oid = from.ok_or_else(|| GitError::BadRevision(range.to_string()))?;
            revwalk.push(oid)?;
            return Ok(());
        }

        let from = self.or_head(from)?;
        let to = self.or_head(to)?;

        revwalk.push(to)?;
        if spec.mode().contains(RevparseMode::MERGE_BASE) {
            revwalk.push(from)?;
            let base = self.inner.merge_base(from, to)?;
            revwalk.hide(base)?;
        } else {
            revwalk.hide(from)?;
        }

        Ok(())
    }

    fn or_head(&self, oid: Option<Oid>) -> GitResult<Oid> {
        match oid {
            Some(oid) => Ok(oid),
            None => Ok(self.inner.head()?.peel_to_commit()?.id()),
        }
    }
}
