//! File system helpers shared by the rewriters.
//!
//! Files are written in place, one at a time. There is no staging and no
//! rollback: a write that succeeded stays on disk if a later one fails.

pub mod discover;
pub mod write;

pub use discover::find_files_named;
pub use write::{WriteStatus, read_file, write_if_changed};
