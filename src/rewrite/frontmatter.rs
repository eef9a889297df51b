//! Front-matter `version:` line rewriting for metadata files.
//!
//! Works on raw text with a line-anchored regex instead of parsing the
//! front-matter block, so delimiters, comments, quoting and line endings
//! elsewhere in the file are never touched.
//!
//! ```text
//! ---
//! name: "alpha"
//! version: "0.1.0"    <- only this quoted value changes
//! ---
//! ```

use crate::error::Result;
use crate::fs::{WriteStatus, read_file, write_if_changed};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

/// Start of line, optional indentation, `version:`, optional spacing, then
/// a double-quoted value on the same line.
static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^([ \t]*version:[ \t]*)"[^"\r\n]*""#).expect("Invalid regex")
});

/// Replaces the quoted value on the first `version:` line of a text file.
///
/// Files without a matching line are reported as unchanged.
///
/// # Errors
///
/// - `Io`: Cannot read or write the file
pub fn update_metadata_version(path: &Path, version: &str, dry_run: bool) -> Result<WriteStatus> {
    let content = read_file(path)?;
    let updated = replace_version_line(&content, version);

    if matches!(updated, Cow::Borrowed(_)) {
        log::debug!("No version line in {}", path.display());
    }

    write_if_changed(path, &content, &updated, dry_run)
}

/// Replaces the first matching `version: "<value>"` with `version`.
///
/// Later matching lines are left as they are. The version is inserted
/// literally; `$` and `\` carry no special meaning.
pub fn replace_version_line<'a>(content: &'a str, version: &str) -> Cow<'a, str> {
    VERSION_LINE.replacen(content, 1, |caps: &Captures| {
        format!("{}\"{}\"", &caps[1], version)
    })
}
