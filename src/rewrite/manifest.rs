//! Manifest (`package.json`) updates.
//!
//! Handles the top-level `version` field of a JSON manifest.

use crate::error::{Result, SyncError};
use crate::fs::{WriteStatus, read_file, write_if_changed};
use serde_json::Value;
use std::path::Path;

/// Sets the top-level `version` in a JSON manifest.
///
/// ```json
/// {
///   "name": "agent-skills",
///   "version": "2.5.0"
/// }
/// ```
///
/// # Guarantees
///
/// - Key order is kept as parsed; a missing `version` is appended last
/// - Numbers keep their original textual form
/// - Output uses two-space indentation and ends with a newline
///
/// # Errors
///
/// - `Io`: Cannot read or write the manifest
/// - `Json`: Manifest is not valid JSON
/// - `InvalidManifest`: Top-level value is not an object
pub fn update_manifest_version(path: &Path, version: &str, dry_run: bool) -> Result<WriteStatus> {
    let content = read_file(path)?;
    let updated = set_version(path, &content, version)?;
    write_if_changed(path, &content, &updated, dry_run)
}

fn set_version(path: &Path, content: &str, version: &str) -> Result<String> {
    let json_err = |source: serde_json::Error| SyncError::Json {
        path: path.to_path_buf(),
        source,
    };

    let mut doc: Value = serde_json::from_str(content).map_err(json_err)?;

    let Some(fields) = doc.as_object_mut() else {
        return Err(SyncError::InvalidManifest {
            path: path.to_path_buf(),
            reason: "top-level value must be an object".to_string(),
        });
    };

    if let Some(previous) = fields.get("version") {
        log::debug!("{}: version {} -> \"{}\"", path.display(), previous, version);
    }
    fields.insert("version".to_string(), Value::from(version));

    let mut out = serde_json::to_string_pretty(&doc).map_err(json_err)?;
    out.push('\n');
    Ok(out)
}
