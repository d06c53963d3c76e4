#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the compliance-guard binary.
#[macro_export]
macro_rules! compliance_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("compliance-guard"))
    };
}

/// A temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path argument for the command line.
    pub fn arg(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Creates a `.compliance-guard.toml` in the project root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".compliance-guard.toml", content);
    }

    /// Writes `package.json` with the given dependency names.
    pub fn create_manifest(&self, dependencies: &[&str]) {
        let deps: Vec<String> = dependencies
            .iter()
            .map(|name| format!("\"{name}\": \"1.0.0\""))
            .collect();
        self.create_file(
            "package.json",
            &format!(
                "{{\"name\": \"fixture\", \"dependencies\": {{{}}}}}",
                deps.join(", ")
            ),
        );
    }

    /// Reads a file relative to the project root.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Adds the documents every GDPR check looks for.
    pub fn create_gdpr_documents(&self) {
        self.create_file(
            "PRIVACY.md",
            "# Privacy Policy\nYou may request deletion, erasure and export of your data.\n\
             Data portability is supported. We keep data for a retention period of 30 days.\n\
             Data Protection Officer: dpo@example.com\n",
        );
        self.create_file("BREACH-PROCEDURE.md", "# Breach procedure\n");
        self.create_file("docs/consent.md", "# Consent\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
