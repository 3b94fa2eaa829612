//! Configuration management for changelist.
//!
//! This crate handles loading the optional `changelist.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, find_config, load_config};
pub use schema::{ChangelogConfig, Config, ReleaseConfig};
