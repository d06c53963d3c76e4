use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _relative: &Path) -> bool {
        true
    }
}

fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "x").unwrap();
}

fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "README.md");
    write(temp_dir.path(), "PRIVACY.md");

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(names(temp_dir.path(), &files), ["PRIVACY.md", "README.md"]);
}

#[test]
fn scanner_skips_hidden_and_node_modules() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".env");
    write(temp_dir.path(), ".git/config");
    write(temp_dir.path(), "node_modules/pkg/index.js");
    write(temp_dir.path(), "src/index.js");

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(names(temp_dir.path(), &files), ["src/index.js"]);
}

#[test]
fn scanner_respects_depth_bound() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/b/c/three.md");
    write(temp_dir.path(), "a/b/c/d/four.md");

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();
    assert_eq!(names(temp_dir.path(), &files), ["a/b/c/three.md"]);

    let shallow = DirectoryScanner::new(AcceptAllFilter)
        .with_max_depth(0)
        .scan(temp_dir.path())
        .unwrap();
    assert!(shallow.is_empty());
}

#[test]
fn scanner_applies_relative_excludes() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "docs/privacy.md");
    write(temp_dir.path(), "fixtures/privacy.md");

    let filter = ExcludeFilter::new(&["fixtures/**".to_string()]).unwrap();
    let files = DirectoryScanner::new(filter).scan(temp_dir.path()).unwrap();

    assert_eq!(names(temp_dir.path(), &files), ["docs/privacy.md"]);
}

#[test]
fn scanner_handles_hidden_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join(".project");
    write(&root, "SECURITY.md");

    let files = DirectoryScanner::new(AcceptAllFilter).scan(&root).unwrap();
    assert_eq!(names(&root, &files), ["SECURITY.md"]);
}
