//! Integration tests for the `fix` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn fix_lists_issues_without_applying() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "fix", &fixture.arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 fixable issue(s):"))
        .stdout(predicate::str::contains("GDPR-001: Privacy Policy Document"))
        .stdout(predicate::str::contains("→ Create privacy policy template"))
        .stdout(predicate::str::contains("Run with --auto to apply fixes automatically."));

    assert!(!fixture.path().join("PRIVACY.md").exists());
}

#[test]
fn fix_auto_applies_and_reports_tally() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "fix", &fixture.arg(), "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Fixed: GDPR-001"))
        .stdout(predicate::str::contains("Done! Fixed: 3, Failed: 0"));

    assert!(fixture.read("PRIVACY.md").contains("Last updated: "));
    assert!(fixture.read("BREACH-PROCEDURE.md").contains("72"));
    assert!(fixture.read(".well-known/security.txt").starts_with("Contact: "));
}

#[test]
fn fix_quiet_keeps_only_results() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "-q", "fix", &fixture.arg()])
        .args(["--auto", "--sovereign"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning for fixable issues").not())
        .stdout(predicate::str::contains("SOVEREIGN MODE").not())
        .stdout(predicate::str::contains("Done! Fixed: 3, Failed: 0"));
}

#[test]
fn fix_auto_is_idempotent() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "fix", &fixture.arg(), "--auto"])
        .assert()
        .success();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "fix", &fixture.arg(), "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No fixable issues found!"));
}

#[test]
fn fix_wet_wipe_previews_only() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .args(["--no-config", "--color", "never", "fix", &fixture.arg(), "--auto", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would fix: GDPR-001"))
        .stdout(predicate::str::contains("no changes made"));

    assert!(!fixture.path().join("PRIVACY.md").exists());
    assert!(!fixture.path().join(".well-known").exists());
}

#[test]
fn fix_ai_templates_when_ai_libraries_present() {
    let fixture = TestFixture::new();
    fixture.create_manifest(&["@anthropic-ai/sdk"]);

    compliance_guard!()
        .args(["--no-config", "fix", &fixture.arg(), "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done! Fixed: 5, Failed: 0"));

    assert!(fixture.path().join("AI-AUDIT-TRAIL.md").exists());
    assert!(fixture.path().join("AI-RISK-ASSESSMENT.md").exists());
}

#[test]
fn fix_nothing_to_do_on_compliant_project() {
    let fixture = TestFixture::new();
    fixture.create_gdpr_documents();
    fixture.create_file("SECURITY.md", "# Security\n");

    compliance_guard!()
        .args(["--no-config", "fix", &fixture.arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No fixable issues found!"));
}
