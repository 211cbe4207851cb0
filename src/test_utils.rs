//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree, removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a balanced tree: `width` subdirectories per level, `depth`
    /// levels, and `files` files in every directory.
    pub fn populate(&self, width: usize, depth: usize, files: usize) -> usize {
        fn fill(dir: &Path, width: usize, depth: usize, files: usize) -> usize {
            let mut created = 0;
            for i in 0..files {
                fs::write(dir.join(format!("file_{}.txt", i)), "").expect("Failed to write file");
                created += 1;
            }
            if depth == 0 {
                return created;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{}", i));
                fs::create_dir(&sub).expect("Failed to create dir");
                created += 1 + fill(&sub, width, depth - 1, files);
            }
            created
        }
        fill(self.dir.path(), width, depth, files)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
