//! Shared fixtures for integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(unused)]
pub const ALPHA_SKILL: &str = "---\nname: \"alpha\"\nversion: \"0.1.0\"\n---\n\n# Alpha\n";
#[allow(unused)]
pub const BETA_SKILL: &str = "---\nname: \"beta\"\nversion: \"9.9.9\"\n---\n";

/// Helper to create a repo with a manifest and two skills at different depths
pub fn create_test_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(
        root.join("package.json"),
        "{\n  \"name\": \"agent-skills\",\n  \"version\": \"0.0.0\",\n  \"private\": true\n}\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("skills/alpha")).unwrap();
    fs::write(root.join("skills/alpha/SKILL.md"), ALPHA_SKILL).unwrap();

    fs::create_dir_all(root.join("skills/beta/nested")).unwrap();
    fs::write(root.join("skills/beta/nested/SKILL.md"), BETA_SKILL).unwrap();

    temp
}

#[allow(unused)]
pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[allow(unused)]
/// Helper to run the binary with the repo as working directory
pub fn run_sync(root: &Path, version: &str, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("sync-version");
    cmd.arg(version).args(extra_args).current_dir(root);

    cmd.assert()
}
