//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// No repository contains the given path.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// The revision or range could not be resolved.
    #[error("unknown revision or range: {0}")]
    BadRevision(String),

    /// The commit range is empty.
    #[error("no commits found")]
    NoCommits,

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
