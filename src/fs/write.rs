//! In-place file writes with change detection and dry-run support.

use crate::error::{Result, SyncError};
use std::fmt;
use std::fs;
use std::path::Path;

/// What happened to a file during a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// New content was written to disk.
    Written,
    /// Content already matched; the file was left alone.
    Unchanged,
    /// Dry run: the file would have been written.
    Pending,
}

impl WriteStatus {
    pub fn is_change(self) -> bool {
        matches!(self, Self::Written | Self::Pending)
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Written => "Updated",
            Self::Unchanged => "Unchanged",
            Self::Pending => "Pending",
        };
        f.write_str(label)
    }
}

/// Reads a UTF-8 file, attaching the path to any I/O error.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read file {}: {}", path.display(), e);
        SyncError::io(path, e)
    })
}

/// Writes `updated` to `path` unless it equals `original`.
///
/// Identical content is skipped, so re-running a sync leaves modification
/// times untouched. With `dry_run` nothing is written.
pub fn write_if_changed(
    path: &Path,
    original: &str,
    updated: &str,
    dry_run: bool,
) -> Result<WriteStatus> {
    if original == updated {
        log::debug!("File content unchanged, skipping: {}", path.display());
        return Ok(WriteStatus::Unchanged);
    }

    if dry_run {
        log::info!("Would update: {}", path.display());
        return Ok(WriteStatus::Pending);
    }

    fs::write(path, updated).map_err(|e| SyncError::io(path, e))?;
    log::info!("Updated: {}", path.display());
    Ok(WriteStatus::Written)
}
