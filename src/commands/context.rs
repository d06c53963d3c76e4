use std::path::Path;

use crate::audit::{ScanOptions, ScanResult, scan_with_callback};
use crate::checker::{Category, select_checks};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::output::CheckProgress;
use crate::registry::registry;

/// Load configuration for a scan of `root`.
///
/// An explicit `config_path` wins over discovery; `no_config` skips loading.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(root: &Path, config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))?;
    Ok(loaded.config)
}

/// Merge CLI flags over the configured scan options.
///
/// A non-empty category list replaces the configured one; `--sovereign` can
/// only turn sovereign mode on.
#[must_use]
pub fn resolve_scan_options(
    config: &Config,
    categories: &[Category],
    sovereign: bool,
) -> ScanOptions {
    let mut options = config.scan_options();
    if !categories.is_empty() {
        options.categories = categories.to_vec();
    }
    options.sovereign |= sovereign;
    options
}

/// Scan with the built-in registry, drawing a spinner unless `quiet`.
///
/// # Errors
/// Returns an error if the scan cannot start.
pub fn scan_with_progress(path: &Path, options: &ScanOptions, quiet: bool) -> Result<ScanResult> {
    let checks = registry();
    let selected = select_checks(checks, &options.categories).len();
    let total = u64::try_from(selected).unwrap_or(u64::MAX);
    let progress = CheckProgress::new(total, quiet);

    let result = scan_with_callback(path, options, checks, |check, _| progress.inc(check.code));
    progress.finish();
    result
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
