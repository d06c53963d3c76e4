//! One-shot compliance scan: build the context, run the checks, score them.

use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::checker::{
    Category, Check, CheckResult, Grade, StatusCounts, compute_score, run_checks_with_callback,
};
use crate::date::current_unix_timestamp;
use crate::error::Result;
use crate::registry::registry;
use crate::scanner::{
    DEFAULT_MAX_DEPTH, DirectoryScanner, ExcludeFilter, FileScanner, ScanContext, read_manifest,
    resolve_root,
};

/// Inputs to a scan beyond the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Empty means every category.
    pub categories: Vec<Category>,
    pub sovereign: bool,
    pub max_depth: usize,
    /// Glob patterns, relative to the scan root.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            sovereign: false,
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: Vec::new(),
        }
    }
}

/// Outcome of one scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Unix seconds at scan start.
    pub timestamp: u64,
    pub scan_path: PathBuf,
    pub score: u8,
    pub grade: Grade,
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub skipped: usize,
    pub results: Vec<CheckResult>,
    pub duration_ms: u64,
    pub scan_id: String,
    pub sovereign: bool,
}

impl ScanResult {
    #[must_use]
    pub const fn counts(&self) -> StatusCounts {
        StatusCounts {
            passed: self.passed,
            warnings: self.warnings,
            failed: self.failed,
            skipped: self.skipped,
        }
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }

    #[must_use]
    pub fn fixable_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_fixable()).count()
    }
}

/// Resolve the root and collect everything checks look at.
///
/// # Errors
/// Returns an error if the root cannot be resolved or an exclude pattern is invalid.
pub fn build_context(path: &Path, options: &ScanOptions) -> Result<ScanContext> {
    let root = resolve_root(path)?;
    let filter = ExcludeFilter::new(&options.exclude)?;
    let files = DirectoryScanner::new(filter)
        .with_max_depth(options.max_depth)
        .scan(&root)?;
    let manifest = read_manifest(&root);

    tracing::debug!(
        root = %root.display(),
        files = files.len(),
        manifest = manifest.is_some(),
        "built scan context"
    );
    Ok(ScanContext::new(root, manifest, files, options.sovereign))
}

/// Scan `path` with the built-in checks.
///
/// # Errors
/// Returns an error only if the scan cannot start; failing checks are data.
pub fn scan(path: &Path, options: &ScanOptions) -> Result<ScanResult> {
    scan_with_registry(path, options, registry())
}

/// Scan `path` with a caller-supplied registry.
///
/// # Errors
/// See [`scan`].
pub fn scan_with_registry(
    path: &Path,
    options: &ScanOptions,
    checks: &[Check],
) -> Result<ScanResult> {
    scan_with_callback(path, options, checks, |_, _| {})
}

/// Scan `path`, calling `on_result` after each check.
///
/// # Errors
/// See [`scan`].
pub fn scan_with_callback<F>(
    path: &Path,
    options: &ScanOptions,
    checks: &[Check],
    on_result: F,
) -> Result<ScanResult>
where
    F: FnMut(&Check, &CheckResult),
{
    let started = Instant::now();
    let timestamp = current_unix_timestamp();

    let ctx = build_context(path, options)?;
    let results = run_checks_with_callback(checks, &ctx, &options.categories, on_result);

    let counts = StatusCounts::from_results(&results);
    let score = compute_score(&results);
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    Ok(ScanResult {
        timestamp,
        scan_id: generate_scan_id(&ctx.root),
        scan_path: ctx.root,
        score,
        grade: Grade::from_score(score),
        passed: counts.passed,
        warnings: counts.warnings,
        failed: counts.failed,
        skipped: counts.skipped,
        results,
        duration_ms,
        sovereign: options.sovereign,
    })
}

/// Eight hex chars identifying one scan.
fn generate_scan_id(root: &Path) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(root.to_string_lossy().as_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());

    let mut id = format!("{:x}", hasher.finalize());
    id.truncate(8);
    id
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
