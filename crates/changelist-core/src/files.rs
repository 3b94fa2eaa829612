//! Project manifest reading and changelog file output.
//!
//! Supports reading the project version from:
//! - Cargo.toml (TOML)
//! - package.json (JSON)

use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use thiserror::Error;
use tracing::debug;

/// Manifest files searched for the project version, in priority order.
pub const MANIFEST_FILES: [&str; 2] = ["Cargo.toml", "package.json"];

/// Errors that can occur when reading manifests or writing the changelog.
#[derive(Debug, Error)]
pub enum FileUpdateError {
    /// File not found.
    #[error("file not found: {0}")]
    NotFound(String),

    /// Failed to read or write the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse file.
    #[error("failed to parse {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Version not found in file.
    #[error("version not found in {0}")]
    VersionNotFound(String),

    /// Unsupported file type.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
}

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileUpdateError>;

/// Finds the nearest manifest in `start_dir` or one of its parents.
#[must_use]
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        MANIFEST_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Reads the version from a manifest file based on its type.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file type is not supported
/// - The version field is not found in the file
/// - The version string is not valid semver
pub fn read_version_from_file(path: &Path) -> FileResult<Version> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    match filename {
        "Cargo.toml" => read_cargo_toml_version(path),
        "package.json" => read_package_json_version(path),
        _ => match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => read_cargo_toml_version(path),
            Some("json") => read_package_json_version(path),
            _ => Err(FileUpdateError::UnsupportedFileType(
                path.display().to_string(),
            )),
        },
    }
}

/// Reads version from a Cargo.toml file.
///
/// Takes `package.version`, or `workspace.package.version` in a workspace
/// root. A member declaring `version.workspace = true` inherits the version
/// of the nearest workspace root above it.
fn read_cargo_toml_version(path: &Path) -> FileResult<Version> {
    let manifest = parse_cargo_toml(path)?;
    let package_version = manifest.get("package").and_then(|p| p.get("version"));

    let version_str = match package_version {
        Some(toml::Value::String(version)) => version.clone(),
        Some(toml::Value::Table(inherit))
            if inherit.get("workspace").and_then(toml::Value::as_bool) == Some(true) =>
        {
            debug!(manifest = %path.display(), "version inherited from the workspace");
            return read_workspace_version(path);
        }
        _ => workspace_version(&manifest)
            .ok_or_else(|| FileUpdateError::VersionNotFound(path.display().to_string()))?
            .to_string(),
    };

    parse_version(path, &version_str)
}

/// Reads `workspace.package.version` from the nearest workspace root above
/// the member manifest at `member`.
fn read_workspace_version(member: &Path) -> FileResult<Version> {
    let roots = member
        .parent()
        .and_then(Path::parent)
        .into_iter()
        .flat_map(Path::ancestors)
        .map(|dir| dir.join("Cargo.toml"))
        .filter(|path| path.is_file());

    for root in roots {
        let manifest = parse_cargo_toml(&root)?;
        if manifest.get("workspace").is_none() {
            continue;
        }
        let version_str = workspace_version(&manifest)
            .ok_or_else(|| FileUpdateError::VersionNotFound(root.display().to_string()))?;
        return parse_version(&root, version_str);
    }

    Err(FileUpdateError::VersionNotFound(member.display().to_string()))
}

fn workspace_version(manifest: &toml::Table) -> Option<&str> {
    manifest
        .get("workspace")?
        .get("package")?
        .get("version")?
        .as_str()
}

fn parse_cargo_toml(path: &Path) -> FileResult<toml::Table> {
    if !path.exists() {
        return Err(FileUpdateError::NotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| FileUpdateError::ParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_version(path: &Path, version_str: &str) -> FileResult<Version> {
    Version::parse(version_str).map_err(|e| FileUpdateError::ParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Reads version from a package.json file.
fn read_package_json_version(path: &Path) -> FileResult<Version> {
    if !path.exists() {
        return Err(FileUpdateError::NotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;

    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| FileUpdateError::ParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let version_str = json
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| FileUpdateError::VersionNotFound(path.display().to_string()))?;

    parse_version(path, version_str)
}

/// Prepends `content` to the file at `path`.
///
/// Missing parent directories and the file itself are created.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn prepend_to_file(path: &Path, content: &str) -> FileResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    fs::write(path, format!("{content}{existing}"))?;
    debug!(path = %path.display(), "prepended changelog");
    Ok(())
}
