//! Singapore Personal Data Protection Act.

use crate::checker::{Category, Check, CheckResult, Severity};

use super::heuristics::{contains_any, find_file, read_lowercase};

pub(super) fn checks() -> Vec<Check> {
    vec![
        consent_obligation(),
        protection_officer(),
        breach_notification(),
        do_not_call(),
    ]
}

fn consent_obligation() -> Check {
    Check::new(
        "PDPA-001",
        "Consent Obligation",
        Category::Pdpa,
        Severity::High,
        15,
        "Check for consent mechanism",
        |check, ctx| {
            if find_file(ctx, &["consent", "agreement", "terms"]).is_some() {
                return Ok(CheckResult::passed(check, "Consent documentation found"));
            }

            Ok(
                CheckResult::warning(check, "No consent mechanism found", check.weight)
                    .with_recommendation("Implement clear consent mechanism")
                    .with_reference("PDPA Part IV"),
            )
        },
    )
}

fn protection_officer() -> Check {
    Check::new(
        "PDPA-002",
        "Data Protection Officer",
        Category::Pdpa,
        Severity::High,
        15,
        "Check for DPO designation",
        |check, ctx| {
            if let Some(found) = find_file(ctx, &["dpo", "officer", "privacy"]) {
                let content = read_lowercase(found)?;
                if contains_any(&content, &["officer", "dpo"]) {
                    return Ok(CheckResult::passed(check, "DPO information found"));
                }
            }

            Ok(
                CheckResult::warning(check, "No DPO designation found", check.weight)
                    .with_recommendation("Designate a Data Protection Officer")
                    .with_reference("PDPA Section 11(3)"),
            )
        },
    )
}

fn breach_notification() -> Check {
    Check::new(
        "PDPA-003",
        "3-Day Breach Notification",
        Category::Pdpa,
        Severity::Critical,
        20,
        "Check for 3-day breach notification procedure",
        |check, ctx| {
            if let Some(found) = find_file(ctx, &["breach", "incident", "notification"]) {
                let content = read_lowercase(found)?;
                if contains_any(&content, &["3 day", "three day", "72"]) {
                    return Ok(CheckResult::passed(
                        check,
                        "Breach notification with timeline found",
                    ));
                }
            }

            Ok(CheckResult::failed(check, "No 3-day breach notification procedure")
                .with_recommendation("Create breach procedure with 3-day notification to PDPC")
                .with_reference("PDPA Section 26D"))
        },
    )
}

fn do_not_call() -> Check {
    Check::new(
        "PDPA-004",
        "Do Not Call Compliance",
        Category::Pdpa,
        Severity::Medium,
        10,
        "Check for DNC registry compliance",
        |check, ctx| {
            if find_file(ctx, &["dnc", "do-not-call", "marketing"]).is_some() {
                return Ok(CheckResult::passed(check, "DNC compliance documentation found"));
            }

            Ok(
                CheckResult::warning(check, "No DNC registry compliance found", check.weight)
                    .with_recommendation("Check Singapore DNC registry before marketing calls")
                    .with_reference("PDPA Part IX"),
            )
        },
    )
}
