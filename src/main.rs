//! Binary entry point for `sync-version`.

use std::process;

fn main() {
    if let Err(e) = sync_version::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
