//! Git commit source for changelist.
//!
//! This crate reads commit subjects out of a Git repository:
//! - Repository discovery from a base directory
//! - Commit range resolution (`a..b`, `a...b`, single revisions)
//! - Latest tag lookup for the default range

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
