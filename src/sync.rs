//! Orchestration of a version sync run.
//!
//! A run is a straight line: validate, rewrite the manifest, discover the
//! metadata files, rewrite each of them, report. The first error stops the
//! run; files already written are not restored.

use crate::error::{Result, SyncError};
use crate::fs::{WriteStatus, find_files_named};
use crate::rewrite::{update_manifest_version, update_metadata_version};
use crate::validation::validate_version;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_METADATA_DIR: &str = "skills";
pub const DEFAULT_METADATA_FILE_NAME: &str = "SKILL.md";

/// Where to look for files, relative to the sync root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub manifest: PathBuf,
    pub metadata_dir: PathBuf,
    pub metadata_file_name: String,
    pub dry_run: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            metadata_dir: PathBuf::from(DEFAULT_METADATA_DIR),
            metadata_file_name: DEFAULT_METADATA_FILE_NAME.to_string(),
            dry_run: false,
        }
    }
}

/// One processed file, relative to the sync root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedFile {
    pub path: PathBuf,
    pub status: WriteStatus,
}

/// Outcome of a completed run. The manifest is always first.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub files: Vec<SyncedFile>,
    dry_run: bool,
}

impl SyncReport {
    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|f| f.path.as_path()).collect()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.files.into_iter().map(|f| f.path).collect()
    }

    /// Number of files whose content changed (or would, in a dry run).
    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.status.is_change()).count()
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Runs version syncs against a root directory.
#[derive(Debug, Clone, Default)]
pub struct Syncer {
    config: SyncConfig,
}

impl Syncer {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Writes `version` into the manifest and every metadata file under `root`.
    ///
    /// # Errors
    ///
    /// - `InvalidVersion`: `version` is empty; nothing was touched
    /// - `Json` / `InvalidManifest`: the manifest could not be updated
    /// - `Walk`: the metadata directory could not be scanned
    /// - `Io`: a file could not be read or written
    pub fn run(&self, root: &Path, version: &str) -> Result<SyncReport> {
        validate_version(version)?;

        let dry_run = self.config.dry_run;
        let mut report = SyncReport {
            files: Vec::new(),
            dry_run,
        };

        let manifest = root.join(&self.config.manifest);
        log::debug!("Updating manifest: {}", manifest.display());
        let status = update_manifest_version(&manifest, version, dry_run)?;
        report.files.push(SyncedFile {
            path: relative_to(&manifest, root)?,
            status,
        });

        let metadata_dir = root.join(&self.config.metadata_dir);
        log::debug!(
            "Searching {} for {}",
            metadata_dir.display(),
            self.config.metadata_file_name
        );
        let metadata_files = find_files_named(&metadata_dir, &self.config.metadata_file_name)?;
        log::debug!("Found {} metadata file(s)", metadata_files.len());

        for path in metadata_files {
            let status = update_metadata_version(&path, version, dry_run)?;
            report.files.push(SyncedFile {
                path: relative_to(&path, root)?,
                status,
            });
        }

        Ok(report)
    }
}

/// Writes `version` into `root/package.json` and every `SKILL.md` under
/// `root/skills`, returning the processed paths relative to `root`.
pub fn sync_version(root: &Path, version: &str) -> Result<Vec<PathBuf>> {
    Syncer::default()
        .run(root, version)
        .map(SyncReport::into_paths)
}

fn relative_to(path: &Path, root: &Path) -> Result<PathBuf> {
    pathdiff::diff_paths(path, root).ok_or_else(|| {
        SyncError::Other(anyhow::anyhow!(
            "Failed to calc path of {} relative to {}",
            path.display(),
            root.display()
        ))
    })
}
