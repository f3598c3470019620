//! Path resolution for locally persisted session state.
//!
//! The CLI stores the current account under the platform data directory,
//! overridable with `OPINE_DATA_DIR` for tests and packaging.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O; adapters handle user prompts separately
//! - Resolution itself is a pure function so it can be tested without
//!   touching process environment

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "OPINE_DATA_DIR";

/// Errors from path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// The platform reports no user data directory and no override is set.
    #[error("No data directory available; set {DATA_DIR_ENV}")]
    NoDataDir,
}

/// Resolve the opine data root.
///
/// `OPINE_DATA_DIR` wins when set and non-empty; otherwise the platform
/// data directory with an `opine` subdirectory is used.
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(std::env::var(DATA_DIR_ENV).ok().as_deref(), dirs::data_dir())
}

/// Location of the persisted current-account file.
pub fn account_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("account.json"))
}

/// Pure resolver backing [`data_root`].
fn resolve_data_root(
    env_override: Option<&str>,
    platform_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(dir) = env_override {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    platform_dir
        .map(|dir| dir.join("opine"))
        .ok_or(PathError::NoDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let resolved =
            resolve_data_root(Some("/tmp/opine-test"), Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/opine-test"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let resolved = resolve_data_root(Some(""), Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/opine"));
    }

    #[test]
    fn test_platform_dir_gets_app_subdirectory() {
        let resolved = resolve_data_root(None, Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/opine"));
    }

    #[test]
    fn test_no_candidates_is_an_error() {
        let err = resolve_data_root(None, None).unwrap_err();
        assert!(err.to_string().contains(DATA_DIR_ENV));
    }
}
