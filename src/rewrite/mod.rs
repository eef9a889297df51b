//! Version rewriting for the two supported file formats.
//!
//! - **`manifest`**: JSON manifest, round-tripped through `serde_json`
//! - **`frontmatter`**: text files with a `version: "<value>"` line,
//!   rewritten with a regex so the rest of the file stays byte-identical

pub mod frontmatter;
pub mod manifest;

pub use frontmatter::{replace_version_line, update_metadata_version};
pub use manifest::update_manifest_version;
