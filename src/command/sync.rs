use crate::error::{Result, SyncError};
use crate::fs::WriteStatus;
use crate::sync::{
    DEFAULT_MANIFEST, DEFAULT_METADATA_DIR, DEFAULT_METADATA_FILE_NAME, SyncConfig, SyncReport,
    Syncer,
};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
#[clap(verbatim_doc_comment)]
pub struct SyncArgs {
    /// Version to write (any non-empty string)
    #[arg(id = "new_version", value_name = "VERSION")]
    pub version: String,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Manifest path, relative to the root
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Directory searched for metadata files, relative to the root
    #[arg(long, value_name = "DIR", default_value = DEFAULT_METADATA_DIR)]
    pub skills_dir: PathBuf,

    /// Exact file name of the metadata files
    #[arg(long, value_name = "NAME", default_value = DEFAULT_METADATA_FILE_NAME)]
    pub file_name: String,

    /// Show what would change without writing anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn config(&self) -> SyncConfig {
        SyncConfig {
            manifest: self.manifest.clone(),
            metadata_dir: self.skills_dir.clone(),
            metadata_file_name: self.file_name.clone(),
            dry_run: self.dry_run,
        }
    }

    /// The explicit root, or the current directory.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().map_err(|e| SyncError::io(".", e)),
        }
    }
}

pub fn execute(args: SyncArgs) -> Result<()> {
    let root = args.resolve_root()?;
    log::debug!("Sync root: {}", root.display());

    let report = Syncer::new(args.config()).run(&root, &args.version)?;

    print_summary(&report);

    if report.is_dry_run() {
        println!(
            "\n{} {} of {} files would change. Run without --dry-run to apply.",
            "Dry run:".yellow().bold(),
            report.written(),
            report.files.len()
        );
    } else {
        println!(
            "{} version to {} in {} files.",
            "Updated".green().bold(),
            args.version.green().bold(),
            report.files.len()
        );
    }

    Ok(())
}

fn print_summary(report: &SyncReport) {
    for file in &report.files {
        let label = format!("{:>12}", file.status.to_string());
        let label = match file.status {
            WriteStatus::Written => label.green().bold(),
            WriteStatus::Pending => label.blue().bold(),
            WriteStatus::Unchanged => label.dimmed(),
        };
        println!(
            "{} {}",
            label,
            file.path.to_string_lossy().replace('\\', "/")
        );
    }
}
