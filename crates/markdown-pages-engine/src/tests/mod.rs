//! Test helpers for file-system tests, plus the fixture snapshot suite.


use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Writes `content` to `relative_path` under `dir`, creating parent directories.
pub fn create_test_file(dir: &TempDir, relative_path: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}
