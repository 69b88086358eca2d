//! Environment variable utilities for ednaplot
//!
//! This module provides utilities for handling environment variables,
//! particularly the EDNAPLOT_DIR variable that points to the project root
//! holding the measurement data.

use crate::constants::{DATA_DIR, QPCR_FILENAME};
use std::env;
use std::path::PathBuf;

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "EDNAPLOT_DIR environment variable is not set. Please set it to the directory holding the measurement data (e.g., export EDNAPLOT_DIR=/path/to/ednaplot)"
    )]
    EdnaplotDirNotSet,

    #[error("EDNAPLOT_DIR points to a non-existent directory: {0}")]
    EdnaplotDirNotFound(PathBuf),
}

/// Get the EDNAPLOT_DIR environment variable and validate it exists
///
/// # Returns
///
/// Returns the path to the ednaplot data root directory.
///
/// # Errors
///
/// Returns an error if:
/// - EDNAPLOT_DIR is not set
/// - EDNAPLOT_DIR points to a non-existent directory
pub fn get_ednaplot_dir() -> Result<PathBuf, EnvError> {
    let ednaplot_dir = env::var("EDNAPLOT_DIR").map_err(|_| EnvError::EdnaplotDirNotSet)?;

    let path = PathBuf::from(ednaplot_dir);

    if !path.exists() {
        return Err(EnvError::EdnaplotDirNotFound(path));
    }

    Ok(path)
}

/// Default location of the qPCR export.
///
/// Resolves to `$EDNAPLOT_DIR/data/cutthroat_trout_qPCR[UW2].csv` when the
/// environment variable is set and valid, and to
/// `data/cutthroat_trout_qPCR[UW2].csv` relative to the working directory
/// otherwise. The binaries read this file unless `--data` overrides it.
pub fn default_qpcr_path() -> PathBuf {
    match get_ednaplot_dir() {
        Ok(dir) => dir.join(DATA_DIR).join(QPCR_FILENAME),
        Err(_) => PathBuf::from(DATA_DIR).join(QPCR_FILENAME),
    }
}

/// Check if EDNAPLOT_DIR is properly configured and print helpful information
///
/// This function is useful for diagnostic purposes and can be called
/// at the start of applications to provide clear error messages.
pub fn check_ednaplot_env() -> Result<(), EnvError> {
    let ednaplot_dir = get_ednaplot_dir()?;

    println!("✓ EDNAPLOT_DIR: {}", ednaplot_dir.display());
    println!("✓ Data file: {}", default_qpcr_path().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_ednaplot_dir_not_set() {
        // Temporarily remove EDNAPLOT_DIR if it exists
        let original = env::var("EDNAPLOT_DIR").ok();
        unsafe { env::remove_var("EDNAPLOT_DIR") };

        let result = get_ednaplot_dir();
        assert!(matches!(result, Err(EnvError::EdnaplotDirNotSet)));

        // Restore original value if it existed
        if let Some(value) = original {
            unsafe { env::set_var("EDNAPLOT_DIR", value) };
        }
    }

    #[test]
    fn test_ednaplot_dir_nonexistent() {
        let original = env::var("EDNAPLOT_DIR").ok();
        unsafe { env::set_var("EDNAPLOT_DIR", "/this/path/should/not/exist") };

        let result = get_ednaplot_dir();
        assert!(matches!(result, Err(EnvError::EdnaplotDirNotFound(_))));

        // Restore original value
        if let Some(value) = original {
            unsafe { env::set_var("EDNAPLOT_DIR", value) };
        } else {
            unsafe { env::remove_var("EDNAPLOT_DIR") };
        }
    }

    #[test]
    fn test_default_path_without_env() {
        let original = env::var("EDNAPLOT_DIR").ok();
        unsafe { env::remove_var("EDNAPLOT_DIR") };

        let path = default_qpcr_path();
        assert_eq!(path, PathBuf::from(DATA_DIR).join(QPCR_FILENAME));

        if let Some(value) = original {
            unsafe { env::set_var("EDNAPLOT_DIR", value) };
        }
    }
}
