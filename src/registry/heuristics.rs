//! Filename and content heuristics shared by the check bodies.

use std::path::Path;

use crate::error::{ComplianceGuardError, Result};
use crate::scanner::ScanContext;

/// Dependencies that mark a project as using AI.
pub const AI_LIBRARIES: &[&str] = &[
    "openai",
    "@anthropic-ai/sdk",
    "anthropic",
    "@google/generative-ai",
    "langchain",
    "@langchain/core",
    "llamaindex",
    "transformers",
    "tensorflow",
    "@tensorflow/tfjs",
    "onnxruntime",
    "ml5",
    "brain.js",
];

/// Lowercased base name of `path`.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// First file whose lowercased base name contains any of `patterns`.
#[must_use]
pub fn find_file<'a>(ctx: &'a ScanContext, patterns: &[&str]) -> Option<&'a Path> {
    ctx.files
        .iter()
        .find(|file| {
            let name = base_name(file);
            patterns
                .iter()
                .any(|pattern| name.contains(&pattern.to_lowercase()))
        })
        .map(std::path::PathBuf::as_path)
}

/// True if any file's lowercased base name satisfies `predicate`.
pub fn any_file_named<P>(ctx: &ScanContext, predicate: P) -> bool
where
    P: Fn(&str) -> bool,
{
    ctx.files.iter().any(|file| predicate(&base_name(file)))
}

/// "Found: NAME" message for a matched file.
#[must_use]
pub fn found_message(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("Found: {name}")
}

/// Lowercased file content. Invalid UTF-8 is replaced rather than rejected,
/// so binary documents are searched as text.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read.
pub fn read_lowercase(path: &Path) -> Result<String> {
    std::fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).to_lowercase())
        .map_err(|source| ComplianceGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// True if the lowercased content contains any keyword. Unreadable files never match.
#[must_use]
pub fn file_contains(path: &Path, keywords: &[&str]) -> bool {
    read_lowercase(path).is_ok_and(|content| contains_any(&content, keywords))
}

/// True if `haystack` contains any of `needles` (lowercased).
#[must_use]
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}

#[must_use]
pub fn has_ai_libraries(ctx: &ScanContext) -> bool {
    ctx.has_dependency(AI_LIBRARIES)
}

#[cfg(test)]
#[path = "heuristics_tests.rs"]
mod tests;
