//! Validation rules for the requested version.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{Result, SyncError};

/// Validates the version string before any file is touched.
///
/// The version is opaque: it only has to be present. Anything non-empty is
/// accepted, including strings that are not semver.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(SyncError::InvalidVersion(
            version.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    Ok(())
}
