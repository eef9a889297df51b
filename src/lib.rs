#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod rewrite;
pub mod sync;
pub mod validation;

pub use error::*;
pub use sync::{SyncConfig, SyncReport, Syncer, sync_version};

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    init_logging(cli.log_level());
    command::sync::execute(cli.sync)
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init()
        .ok();
}
