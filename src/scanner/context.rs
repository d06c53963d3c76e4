use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ComplianceGuardError, Result};

/// Dependency manifest read from the scan root.
pub const MANIFEST_FILE: &str = "package.json";

/// Parsed dependency manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    value: Value,
}

impl Manifest {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value }
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Names declared under `dependencies` and `devDependencies`.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        ["dependencies", "devDependencies"]
            .into_iter()
            .filter_map(|section| self.value.get(section)?.as_object())
            .flat_map(|deps| deps.keys().map(String::as_str))
    }

    /// True if any of `names` is a declared dependency.
    #[must_use]
    pub fn has_dependency(&self, names: &[&str]) -> bool {
        self.dependency_names().any(|dep| names.contains(&dep))
    }

    /// The whole manifest serialized and lowercased, for keyword matching.
    #[must_use]
    pub fn to_lowercase_text(&self) -> String {
        self.value.to_string().to_lowercase()
    }
}

/// Everything a check may look at. Built once per scan and shared read-only.
#[derive(Debug, Clone)]
pub struct ScanContext {
    pub root: PathBuf,
    pub manifest: Option<Manifest>,
    /// Files below the root, absolute, in walk order.
    pub files: Vec<PathBuf>,
    /// Advisory: checks phrase cloud findings as hard requirements.
    pub sovereign: bool,
}

impl ScanContext {
    #[must_use]
    pub const fn new(
        root: PathBuf,
        manifest: Option<Manifest>,
        files: Vec<PathBuf>,
        sovereign: bool,
    ) -> Self {
        Self {
            root,
            manifest,
            files,
            sovereign,
        }
    }

    #[must_use]
    pub fn has_dependency(&self, names: &[&str]) -> bool {
        self.manifest.as_ref().is_some_and(|m| m.has_dependency(names))
    }
}

/// Resolve `path` to an absolute directory.
///
/// # Errors
/// Returns `ScanRoot` if the path does not exist or is not a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = dunce::canonicalize(path).map_err(|source| ComplianceGuardError::ScanRoot {
        path: path.to_path_buf(),
        source,
    })?;

    if !root.is_dir() {
        return Err(ComplianceGuardError::ScanRoot {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    Ok(root)
}

/// Read the manifest at `root`. Missing or malformed manifests yield `None`.
#[must_use]
pub fn read_manifest(root: &Path) -> Option<Manifest> {
    let path = root.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).ok()?;

    match serde_json::from_str(&content) {
        Ok(value) => Some(Manifest::new(value)),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "ignoring malformed manifest");
            None
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
