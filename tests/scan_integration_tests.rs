//! Integration tests for the `scan` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn scan_empty_project_fails() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "scan", &fixture.arg()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("COMPLIANCE HEALTH SCORE:"))
        .stdout(predicate::str::contains("TOP PRIORITIES:"));
}

#[test]
fn scan_compliant_gdpr_project_passes() {
    let fixture = TestFixture::new();
    fixture.create_gdpr_documents();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "scan", &fixture.arg(), "-c", "gdpr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPLIANCE HEALTH SCORE: 100/100 (Grade: A)"))
        .stdout(predicate::str::contains("GDPR: 5/5 passed"))
        .stdout(predicate::str::contains("TOP PRIORITIES:").not());
}

#[test]
fn scan_missing_directory_is_runtime_error() {
    let fixture = TestFixture::new();
    let missing = fixture.path().join("missing");

    compliance_guard!()
        .args(["--no-config", "scan", missing.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn scan_unknown_category_is_rejected() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["scan", &fixture.arg(), "--categories", "hipaa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn scan_category_without_checks_scores_full() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "scan", &fixture.arg(), "-c", "penguin", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 100"));
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn scan_json_output_is_complete() {
    let fixture = TestFixture::new();

    let output = compliance_guard!()
        .args(["--no-config", "scan", &fixture.arg(), "--output", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 38);
    assert_eq!(results[0]["check_id"], "GDPR-001");
    assert_eq!(results[37]["check_id"], "JIS-004");

    let counted = ["passed", "warnings", "failed", "skipped"]
        .iter()
        .map(|key| parsed[key].as_u64().unwrap())
        .sum::<u64>();
    assert_eq!(counted, 38);
    assert_eq!(parsed["scan_id"].as_str().unwrap().len(), 8);
}

#[test]
fn scan_json_order_is_stable() {
    let fixture = TestFixture::new();
    fixture.create_gdpr_documents();

    let ids = || {
        let output = compliance_guard!()
            .args(["--no-config", "scan", &fixture.arg(), "-o", "json"])
            .output()
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        parsed["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| format!("{}:{}", r["check_id"], r["status"]))
            .collect::<Vec<_>>()
    };

    assert_eq!(ids(), ids());
}

#[test]
fn scan_verbose_lists_individual_checks() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "-v", "scan", &fixture.arg(), "-c", "gdpr"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ Privacy Policy Document"))
        .stdout(predicate::str::contains("No privacy policy document found"));
}

#[test]
fn scan_quiet_still_prints_report() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "--quiet", "scan", &fixture.arg()])
        .arg("--sovereign")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("COMPLIANCE HEALTH SCORE:"))
        .stdout(predicate::str::contains("SOVEREIGN MODE").not());
}

#[test]
fn scan_quiet_json_is_parseable() {
    let fixture = TestFixture::new();

    let output = compliance_guard!()
        .args(["--no-config", "-q", "scan", &fixture.arg(), "-o", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["results"].as_array().unwrap().len(), 38);
}

#[test]
fn scan_text_mentions_auto_fix() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "scan", &fixture.arg()])
        .assert()
        .stdout(predicate::str::contains("3 issue(s) can be auto-fixed:"))
        .stdout(predicate::str::contains("compliance-guard fix --auto"));
}

#[test]
fn scan_never_color_has_no_escape_codes() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "scan", &fixture.arg()])
        .assert()
        .stdout(predicate::str::contains("\x1b[").not());
}

// =============================================================================
// Heuristics Through The CLI
// =============================================================================

#[test]
fn scan_ai_checks_skipped_without_ai_libraries() {
    let fixture = TestFixture::new();
    fixture.create_manifest(&["express"]);

    let output = compliance_guard!()
        .args(["--no-config", "scan", &fixture.arg(), "-c", "ai_act", "-o", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["skipped"], 4);
}

#[test]
fn scan_ai_checks_run_with_ai_libraries() {
    let fixture = TestFixture::new();
    fixture.create_manifest(&["openai"]);

    let output = compliance_guard!()
        .args(["--no-config", "scan", &fixture.arg(), "-c", "ai-act", "-o", "json"])
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["skipped"], 0);
    assert_eq!(parsed["results"].as_array().unwrap().len(), 4);
}

#[test]
fn scan_sovereign_flags_foreign_cloud() {
    let fixture = TestFixture::new();
    fixture.create_manifest(&["aws-sdk", "@google-cloud/storage"]);

    compliance_guard!()
        .args(["--no-config", "--color", "never", "-v", "scan", &fixture.arg(), "-c", "nis2"])
        .arg("--sovereign")
        .assert()
        .stdout(predicate::str::contains("SOVEREIGN MODE"))
        .stdout(predicate::str::contains("Foreign cloud detected"))
        .stdout(predicate::str::contains("Sovereign mode: No data left your machine"));
}
