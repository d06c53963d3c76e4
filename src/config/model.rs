use serde::{Deserialize, Serialize};

use crate::audit::ScanOptions;
use crate::checker::Category;
use crate::scanner::DEFAULT_MAX_DEPTH;

/// Contents of `.compliance-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// `[scan]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Categories to check. Empty means all.
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub sovereign: bool,

    /// Directory levels walked below the scan root.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Extra glob excludes, relative to the scan root.
    #[serde(default)]
    pub exclude: Vec<String>,
}

const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            sovereign: false,
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Scan options described by this config, before CLI overrides.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            categories: self.scan.categories.clone(),
            sovereign: self.scan.sovereign,
            max_depth: self.scan.max_depth,
            exclude: self.scan.exclude.clone(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
