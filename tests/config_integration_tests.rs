//! Integration tests for configuration loading.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn config_categories_limit_scan() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\ncategories = [\"jis\"]\n");

    let output = compliance_guard!()
        .args(["scan", &fixture.arg(), "-o", "json"])
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r["category"] == "jis"));
}

#[test]
fn cli_categories_override_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\ncategories = [\"jis\"]\n");

    let output = compliance_guard!()
        .args(["scan", &fixture.arg(), "-o", "json", "-c", "appi"])
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = parsed["results"].as_array().unwrap();
    assert!(results.iter().all(|r| r["category"] == "appi"));
}

#[test]
fn no_config_ignores_project_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\ncategories = [\"penguin\"]\n");

    compliance_guard!()
        .args(["--no-config", "-q", "scan", &fixture.arg()])
        .assert()
        .code(1);
}

#[test]
fn config_sovereign_is_reported() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nsovereign = true\ncategories = [\"gulf\"]\n");

    compliance_guard!()
        .args(["scan", &fixture.arg(), "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sovereign\": true"));
}

#[test]
fn config_excludes_hide_files() {
    let fixture = TestFixture::new();
    fixture.create_file("fixtures/PRIVACY.md", "# Privacy\n");
    fixture.create_config("[scan]\ncategories = [\"gdpr\"]\nexclude = [\"fixtures/**\"]\n");

    compliance_guard!()
        .args(["--color", "never", "-v", "scan", &fixture.arg()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No privacy policy document found"));
}

#[test]
fn config_max_depth_bounds_walk() {
    let fixture = TestFixture::new();
    fixture.create_file("a/b/PRIVACY.md", "# Privacy\n");
    fixture.create_config("[scan]\ncategories = [\"gdpr\"]\nmax_depth = 1\n");

    compliance_guard!()
        .args(["--color", "never", "-v", "scan", &fixture.arg()])
        .assert()
        .stdout(predicate::str::contains("No privacy policy document found"));
}

#[test]
fn invalid_config_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\ncategories = [\"hipaa\"]\n");

    compliance_guard!()
        .args(["scan", &fixture.arg()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn unknown_config_key_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nmax_lines = 10\n");

    compliance_guard!()
        .args(["scan", &fixture.arg()])
        .assert()
        .code(2);
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("ci/audit.toml", "[scan]\ncategories = [\"provider\"]\n");
    let config = fixture.path().join("ci/audit.toml");

    compliance_guard!()
        .args(["--config", config.to_str().unwrap(), "-q", "scan", &fixture.arg()])
        .assert()
        .success();
}
