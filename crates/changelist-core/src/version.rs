//! Release version resolution.

use std::path::Path;

use semver::Version;
use tracing::{debug, warn};

use crate::files::{find_manifest, read_version_from_file};
use crate::{CoreError, CoreResult};

/// Version used when no manifest provides one.
pub const UNKNOWN_VERSION: &str = "x.x.x";

/// Checks that a requested release is a semantic version.
///
/// A leading `v` or `=` is tolerated. The release is returned unchanged.
///
/// # Errors
///
/// Returns [`CoreError::InvalidRelease`] if the release is not valid semver.
pub fn validate_release(release: &str) -> CoreResult<&str> {
    let release = release.trim();
    let bare = release
        .strip_prefix('v')
        .or_else(|| release.strip_prefix('='))
        .unwrap_or(release);

    match Version::parse(bare) {
        Ok(_) => Ok(release),
        Err(_) => Err(CoreError::InvalidRelease(release.to_string())),
    }
}

/// Returns the version of the nearest project manifest, without `-pre`.
///
/// Falls back to [`UNKNOWN_VERSION`] when no manifest is found or it holds
/// no usable version.
#[must_use]
pub fn manifest_version(base_dir: &Path) -> String {
    let Some(manifest) = find_manifest(base_dir) else {
        debug!(dir = %base_dir.display(), "no manifest found");
        return UNKNOWN_VERSION.to_string();
    };

    match read_version_from_file(&manifest) {
        Ok(version) => version.to_string().replace("-pre", ""),
        Err(e) => {
            warn!(manifest = %manifest.display(), "cannot read version: {e}");
            UNKNOWN_VERSION.to_string()
        }
    }
}

/// Picks the release version to print in the header.
///
/// A valid `requested` release wins. An invalid one is reported and the
/// manifest version is used instead, as it is when nothing was requested.
#[must_use]
pub fn resolve_release(requested: Option<&str>, base_dir: &Path) -> String {
    if let Some(requested) = requested {
        match validate_release(requested) {
            Ok(release) => return release.to_string(),
            Err(e) => warn!("{e}, using the project manifest version"),
        }
    }

    manifest_version(base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: &str, content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(manifest), content).unwrap();
        dir
    }

    #[test]
    fn test_validate_release_valid() {
        assert_eq!(validate_release("1.0.0").unwrap(), "1.0.0");
        assert_eq!(validate_release("2.0.0-rc.1").unwrap(), "2.0.0-rc.1");
    }

    #[test]
    fn test_validate_release_keeps_prefix() {
        assert_eq!(validate_release("v1.2.3").unwrap(), "v1.2.3");
        assert_eq!(validate_release(" =1.2.3 ").unwrap(), "=1.2.3");
    }

    #[test]
    fn test_validate_release_invalid() {
        let err = validate_release("1.0").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRelease(ref r) if r == "1.0"));
        assert!(validate_release("next").is_err());
    }

    #[test]
    fn test_manifest_version_cargo() {
        let dir = project("Cargo.toml", "[package]\nname = \"x\"\nversion = \"0.3.1\"\n");
        assert_eq!(manifest_version(dir.path()), "0.3.1");
    }

    #[test]
    fn test_manifest_version_skips_dependency_tables() {
        let dir = project(
            "Cargo.toml",
            "[dependencies.serde]\nversion = \"1.0.200\"\n\n[package]\nname = \"x\"\nversion = \"0.3.1\"\n",
        );
        assert_eq!(manifest_version(dir.path()), "0.3.1");
    }

    #[test]
    fn test_manifest_version_strips_pre() {
        let dir = project("package.json", r#"{"version": "0.20.0-pre"}"#);
        assert_eq!(manifest_version(dir.path()), "0.20.0");
    }

    #[test]
    fn test_manifest_version_unreadable() {
        let dir = project("package.json", "not json");
        assert_eq!(manifest_version(dir.path()), UNKNOWN_VERSION);
    }

    #[test]
    fn test_resolve_release_requested() {
        let dir = project("Cargo.toml", "[package]\nversion = \"0.3.1\"\n");
        assert_eq!(resolve_release(Some("1.0.0"), dir.path()), "1.0.0");
    }

    #[test]
    fn test_resolve_release_invalid_falls_back() {
        let dir = project("Cargo.toml", "[package]\nversion = \"0.3.1\"\n");
        assert_eq!(resolve_release(Some("soon"), dir.path()), "0.3.1");
    }

    #[test]
    fn test_resolve_release_from_manifest() {
        let dir = project("package.json", r#"{"version": "4.5.6"}"#);
        assert_eq!(resolve_release(None, dir.path()), "4.5.6");
    }
}
