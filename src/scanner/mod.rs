mod context;
mod filter;

pub use context::{MANIFEST_FILE, Manifest, ScanContext, read_manifest, resolve_root};
pub use filter::{ExcludeFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// Default number of directory levels walked below the scan root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Bounded-depth walker that skips hidden entries and `node_modules`.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    max_depth: usize,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Directories nested deeper than `max_depth` below the root are not entered.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        // files directly in the root sit at walkdir depth 1
        WalkDir::new(root)
            .max_depth(self.max_depth.saturating_add(1))
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_ignored(e))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .strip_prefix(root)
                    .is_ok_and(|relative| self.filter.should_include(relative))
            })
            .map(DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

fn is_ignored(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "node_modules"
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
