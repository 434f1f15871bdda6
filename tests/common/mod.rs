#![allow(dead_code)]

use std::{fs, path::Path};

use assert_cmd::Command;
use slice_repo::core::manifest::CRITICAL_FILES;

/// The binary, run inside `dir` with a fixed git identity.
pub fn slice_repo(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("slice-repo").unwrap();
    cmd.current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Slice Tester")
        .env("GIT_AUTHOR_EMAIL", "tester@example.com")
        .env("GIT_COMMITTER_NAME", "Slice Tester")
        .env("GIT_COMMITTER_EMAIL", "tester@example.com")
        .env_remove("SLICE_REPO_GIT")
        .env_remove("RUST_LOG");
    cmd
}

/// Write every critical framework file with recognizable contents.
pub fn write_critical_files(dir: &Path) {
    for f in CRITICAL_FILES {
        fs::write(dir.join(f), format!("contents of {f}\n")).unwrap();
    }
}
