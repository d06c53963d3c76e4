use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ComplianceGuardError, Result};

pub trait FileFilter {
    /// `relative` is the path below the scan root.
    fn should_include(&self, relative: &Path) -> bool;
}

/// Excludes paths matching any configured glob.
pub struct ExcludeFilter {
    patterns: GlobSet,
}

impl ExcludeFilter {
    /// Build a filter from glob patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| ComplianceGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let patterns = builder
            .build()
            .map_err(|e| ComplianceGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { patterns })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for ExcludeFilter {
    fn should_include(&self, relative: &Path) -> bool {
        !self.patterns.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
