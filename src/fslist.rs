//! Directory-listing abstraction for testability.
//!
//! Provides a trait for listing immediate directory entries that can be
//! mocked in tests, mirroring how the arity rule consumes the filesystem:
//! one shallow listing per directory, never a recursive walk.

use std::path::Path;

/// Trait for listing the immediate entries of a directory.
pub trait DirLister {
    /// List the names of the immediate children of `dir`.
    ///
    /// Entry names are returned as-is (no path prefix); subdirectory
    /// entries are included alongside files.
    ///
    /// # Errors
    /// Returns an error if `dir` does not exist, is not a directory, or
    /// cannot be read.
    fn list_dir(&self, dir: &Path) -> std::io::Result<Vec<String>>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealDirLister;

impl DirLister for RealDirLister {
    fn list_dir(&self, dir: &Path) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
