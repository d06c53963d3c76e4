use super::*;
use crate::checker::test_support::check;

fn sample() -> Check {
    check("T-001", Category::Gdpr, 15, |c, _| Ok(CheckResult::passed(c, "ok")))
}

#[test]
fn failed_deducts_full_weight() {
    let result = CheckResult::failed(&sample(), "missing");
    assert!(result.is_failed());
    assert_eq!(result.score_impact, 15);
    assert_eq!(result.check_id, "T-001");
    assert_eq!(result.category, Category::Gdpr);
}

#[test]
fn warning_keeps_given_impact() {
    let result = CheckResult::warning(&sample(), "partial", 6);
    assert!(result.is_warning());
    assert_eq!(result.score_impact, 6);
}

#[test]
fn passed_and_skipped_have_no_impact() {
    assert_eq!(CheckResult::passed(&sample(), "ok").score_impact, 0);
    let skipped = CheckResult::skipped(&sample(), "n/a");
    assert!(skipped.is_skipped());
    assert_eq!(skipped.score_impact, 0);
}

#[test]
fn with_fix_marks_auto_fixable() {
    let fix = FixAction::new("Create PRIVACY.md").with_remediation(|| Ok(true));
    let result = CheckResult::failed(&sample(), "missing").with_fix(fix);
    assert!(result.can_auto_fix);
    assert!(result.is_fixable());
    assert!(result.remediation().is_some());
}

#[test]
fn passed_result_is_never_fixable() {
    let fix = FixAction::new("noop").with_remediation(|| Ok(true));
    let result = CheckResult::passed(&sample(), "ok").with_fix(fix);
    assert!(!result.is_fixable());
}

#[test]
fn fix_action_without_remediation() {
    let fix = FixAction::new("manual").with_command("echo hi");
    assert!(!fix.can_remediate());
    assert_eq!(fix.command.as_deref(), Some("echo hi"));
}

#[test]
fn json_omits_absent_fields_and_callbacks() {
    let fix = FixAction::new("Create file").with_remediation(|| Ok(true));
    let result = CheckResult::failed(&sample(), "missing")
        .with_recommendation("add it")
        .with_fix(fix);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["check_id"], "T-001");
    assert_eq!(value["status"], "failed");
    assert_eq!(value["severity"], "medium");
    assert_eq!(value["recommendation"], "add it");
    assert!(value.get("reference").is_none());
    assert_eq!(value["fix_action"]["description"], "Create file");
    assert!(value["fix_action"].get("remediation").is_none());
}

#[test]
fn debug_hides_closure() {
    let fix = FixAction::new("x").with_remediation(|| Ok(false));
    let text = format!("{fix:?}");
    assert!(text.contains("<fn>"));
}
