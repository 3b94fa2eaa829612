//! Core library for changelist.
//!
//! This crate turns commit subjects into release notes:
//! - [`classify`]: groups subjects by their `<category>:` prefix
//! - [`Format`]: the closed set of output formats
//! - [`render_header`]: fills a release header template
//! - [`ChangelogGenerator`]: ties the three together

mod classify;
mod error;
mod files;
mod format;
mod header;
mod pipeline;
mod version;

pub use classify::{
    Classification, IGNORED_CATEGORY, IgnoreSet, OTHERS_CATEGORY, capitalize, classify,
};
pub use error::{CoreError, CoreResult};
pub use files::{FileResult, FileUpdateError, find_manifest, prepend_to_file, read_version_from_file};
pub use format::{Format, FormatSpec};
pub use header::{format_date, render_header, today};
pub use pipeline::{ChangelogGenerator, generate};
pub use version::{UNKNOWN_VERSION, manifest_version, resolve_release, validate_release};
