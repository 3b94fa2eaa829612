//! Locating and reading `changelist.toml`.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "changelist.toml";

/// Parses the configuration file at `path`.
///
/// Missing sections and keys take their default values.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if there is no such file, and an error
/// if it cannot be read or is not valid TOML.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|source| ConfigError::InvalidToml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Returns the nearest `changelist.toml` in `start_dir` or one of its parents.
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Loads the nearest configuration file above `start_dir`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if no directory up to the root holds
/// a configuration file, or an error if the one found cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    match find_config(start_dir) {
        Some(path) => load_config(path),
        None => Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME))),
    }
}
