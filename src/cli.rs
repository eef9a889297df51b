use crate::command::sync::SyncArgs;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "sync-version",
    version,
    about = "Write one version into package.json and every SKILL.md"
)]
pub struct Cli {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
