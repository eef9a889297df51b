//! Recursive lookup of files by exact base name.

use crate::error::{Result, SyncError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns every file under `root` whose base name equals `file_name`.
///
/// The match is exact and case-sensitive. Symbolic links are not followed,
/// so a link pointing back up the tree cannot cause a cycle. Entries are
/// sorted by file name within each directory.
///
/// # Errors
///
/// - `Walk`: `root` does not exist, or a directory could not be listed
pub fn find_files_named(root: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| SyncError::Walk {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;

        if entry.file_type().is_file() && entry.file_name() == file_name {
            log::debug!("Found {}", entry.path().display());
            found.push(entry.into_path());
        }
    }

    Ok(found)
}
