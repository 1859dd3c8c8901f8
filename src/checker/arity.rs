//! Files-per-directory (arity) rule.
//!
//! Counts how many recognized source files live directly in the directory
//! containing an analyzed file and reports a violation when the count
//! exceeds the configured maximum. Counts are memoized per directory for
//! the lifetime of the checker, so a run over N files in one directory
//! performs a single listing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ArityGuardError, Result};
use crate::fslist::{DirLister, RealDirLister};

use super::{Rule, RuleKind, RuleMeta, Violation};

/// File suffixes counted toward directory arity.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];

/// Default files-per-directory limit used by the preset layer.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Outcome of listing a directory.
///
/// `Unreadable` covers a missing path, a non-directory path, permission
/// denial, and any other I/O fault. The caller maps it to a zero count.
enum Listing {
    Listed(Vec<String>),
    Unreadable,
}

/// Checker for the files-per-directory limit.
///
/// Holds one count cache for its lifetime. Cached counts are never
/// recomputed, even if directory contents change during the run;
/// run-scoped staleness is accepted.
pub struct ArityChecker<L: DirLister = RealDirLister> {
    max_files: usize,
    lister: L,
    counts: RefCell<HashMap<PathBuf, usize>>,
}

impl ArityChecker<RealDirLister> {
    /// Create a checker bound to `max_files`, backed by the real filesystem.
    ///
    /// # Errors
    /// Returns an error if `max_files` is zero.
    pub fn new(max_files: usize) -> Result<Self> {
        Self::with_lister(max_files, RealDirLister)
    }
}

impl<L: DirLister> ArityChecker<L> {
    /// Create a checker with a custom directory-listing backend.
    ///
    /// # Errors
    /// Returns an error if `max_files` is zero.
    pub fn with_lister(max_files: usize, lister: L) -> Result<Self> {
        if max_files == 0 {
            return Err(ArityGuardError::Config(
                "max_files_per_dir must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            max_files,
            lister,
            counts: RefCell::new(HashMap::new()),
        })
    }

    /// The configured files-per-directory limit.
    #[must_use]
    pub const fn max_files(&self) -> usize {
        self.max_files
    }

    fn listing(&self, dir: &Path) -> Listing {
        match self.lister.list_dir(dir) {
            Ok(names) => Listing::Listed(names),
            Err(_) => Listing::Unreadable,
        }
    }

    /// Count of recognized files directly in `dir`, memoized.
    fn dir_count(&self, dir: &Path) -> usize {
        if let Some(&count) = self.counts.borrow().get(dir) {
            return count;
        }

        // Fail-open: an unreadable directory counts as zero so an
        // inaccessible path never blocks analysis of the file that
        // triggered the check.
        let count = match self.listing(dir) {
            Listing::Listed(names) => names
                .iter()
                .filter(|name| has_recognized_extension(name))
                .count(),
            Listing::Unreadable => 0,
        };

        self.counts.borrow_mut().insert(dir.to_path_buf(), count);
        count
    }

    /// Evaluate a single file against the directory arity limit.
    ///
    /// Only the file's immediate parent directory is counted; no recursive
    /// descent. Returns at most one violation, anchored at line 1 column 0
    /// since the check is directory-scoped rather than line-scoped.
    pub fn evaluate(&self, path: &Path) -> Option<Violation> {
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let count = self.dir_count(dir);

        (count > self.max_files).then(|| {
            Violation::at_file_start(format!(
                "Directory has {count} files (max: {max}). Split into subdirectories.",
                max = self.max_files
            ))
        })
    }
}

impl<L: DirLister> Rule for ArityChecker<L> {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            kind: RuleKind::Problem,
            description: format!(
                "Enforce a maximum of {} source files per directory",
                self.max_files
            ),
            schema: Vec::new(),
        }
    }

    fn evaluate(&self, path: &Path) -> Option<Violation> {
        ArityChecker::evaluate(self, path)
    }
}

fn has_recognized_extension(name: &str) -> bool {
    RECOGNIZED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[cfg(test)]
#[path = "arity_tests.rs"]
mod tests;
