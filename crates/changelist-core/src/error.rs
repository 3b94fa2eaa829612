//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Nothing to classify.
    #[error("no commits found")]
    NoCommits,

    /// The requested format has no implementation.
    #[error("format `{0}` doesn't exist (expected one of: markdown, chat)")]
    UnknownFormat(String),

    /// The requested release is not a semantic version.
    #[error("\"{0}\" is not valid semver")]
    InvalidRelease(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
