//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a (possibly nested) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Render this tree to a string with [`crate::render`].
    pub fn render(&self, include_files: bool) -> String {
        let mut out = Vec::new();
        crate::render(&mut out, self.path(), include_files).expect("Failed to render");
        String::from_utf8(out).expect("Output is not UTF-8")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
