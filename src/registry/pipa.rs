//! South Korea Personal Information Protection Act.

use crate::checker::{Category, Check, CheckResult, Severity};

use super::heuristics::{contains_any, find_file, read_lowercase};

pub(super) fn checks() -> Vec<Check> {
    vec![
        privacy_officer(),
        breach_notification(),
        explicit_consent(),
        cross_border_transfer(),
    ]
}

fn privacy_officer() -> Check {
    Check::new(
        "PIPA-001",
        "Privacy Officer Designation",
        Category::Pipa,
        Severity::Critical,
        20,
        "Check for designated privacy officer (CPO)",
        |check, ctx| {
            if let Some(found) = find_file(ctx, &["privacy", "cpo", "officer"]) {
                let content = read_lowercase(found)?;
                if contains_any(&content, &["officer", "cpo", "책임자"]) {
                    return Ok(CheckResult::passed(check, "Privacy officer information found"));
                }
            }

            Ok(
                CheckResult::failed(check, "No Chief Privacy Officer (CPO) designation found")
                    .with_recommendation("Designate and document a Chief Privacy Officer")
                    .with_reference("PIPA Article 31"),
            )
        },
    )
}

fn breach_notification() -> Check {
    Check::new(
        "PIPA-002",
        "24-Hour Breach Notification",
        Category::Pipa,
        Severity::Critical,
        20,
        "Check for 24-hour breach notification procedure (stricter than GDPR!)",
        |check, ctx| {
            let Some(found) = find_file(ctx, &["breach", "incident", "notification"]) else {
                return Ok(CheckResult::failed(
                    check,
                    "No 24-hour breach notification procedure found",
                )
                .with_recommendation(
                    "Create breach procedure with 24-hour notification (stricter than GDPR!)",
                )
                .with_reference("PIPA Article 34"));
            };

            let content = read_lowercase(found)?;
            if contains_any(&content, &["24", "twenty-four"]) {
                return Ok(CheckResult::passed(
                    check,
                    "24-hour breach notification procedure found",
                ));
            }

            Ok(CheckResult::warning(
                check,
                "Breach procedure found but 24-hour requirement not explicit",
                10,
            )
            .with_recommendation("Update to specify 24-hour notification (PIPA requirement)"))
        },
    )
}

fn explicit_consent() -> Check {
    Check::new(
        "PIPA-003",
        "Explicit Consent (Opt-in)",
        Category::Pipa,
        Severity::High,
        15,
        "Check for opt-in consent mechanism",
        |check, ctx| {
            if find_file(ctx, &["consent", "opt-in", "agreement"]).is_some() {
                return Ok(CheckResult::passed(check, "Consent documentation found"));
            }

            Ok(CheckResult::warning(
                check,
                "No explicit opt-in consent mechanism found",
                check.weight,
            )
            .with_recommendation("Implement clear opt-in consent (PIPA requires explicit consent)")
            .with_reference("PIPA Article 15"))
        },
    )
}

fn cross_border_transfer() -> Check {
    Check::new(
        "PIPA-004",
        "Cross-Border Transfer Documentation",
        Category::Pipa,
        Severity::High,
        15,
        "Check for cross-border data transfer documentation",
        |check, ctx| {
            if find_file(ctx, &["transfer", "cross-border", "international"]).is_some() {
                return Ok(CheckResult::passed(
                    check,
                    "Cross-border transfer documentation found",
                ));
            }

            Ok(CheckResult::warning(
                check,
                "No cross-border transfer documentation found",
                check.weight,
            )
            .with_recommendation("Document data transfers outside South Korea")
            .with_reference("PIPA Article 17"))
        },
    )
}
