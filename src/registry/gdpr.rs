//! EU General Data Protection Regulation.

use crate::checker::{Category, Check, CheckResult, FixAction, Severity};
use crate::date::CalendarDate;

use super::heuristics::{contains_any, find_file, found_message, read_lowercase};
use super::templates::{self, write_template};

const CONSENT_LIBRARIES: &[&str] = &[
    "cookieconsent",
    "cookie-consent",
    "gdpr-cookie",
    "tarteaucitron",
    "klaro",
    "onetrust",
    "cookiebot",
    "consent-manager",
];

pub(super) fn checks() -> Vec<Check> {
    vec![
        privacy_policy(),
        data_retention(),
        breach_notification(),
        consent_management(),
        dpo_contact(),
    ]
}

fn privacy_policy() -> Check {
    Check::new(
        "GDPR-001",
        "Privacy Policy Document",
        Category::Gdpr,
        Severity::High,
        15,
        "Check for privacy policy document",
        |check, ctx| {
            let patterns = ["privacy", "privacy-policy", "privacypolicy", "gdpr", "datenschutz"];
            if let Some(found) = find_file(ctx, &patterns) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            let target = ctx.root.join("PRIVACY.md");
            let fix = FixAction::new("Create privacy policy template").with_remediation(move || {
                write_template(&target, &templates::privacy_policy(CalendarDate::today()))
            });
            Ok(CheckResult::failed(check, "No privacy policy document found")
                .with_recommendation("Create a PRIVACY.md or privacy-policy.md file")
                .with_reference("GDPR Article 13 & 14")
                .with_fix(fix))
        },
    )
}

fn data_retention() -> Check {
    Check::new(
        "GDPR-002",
        "Data Retention Policy",
        Category::Gdpr,
        Severity::High,
        15,
        "Check for data retention policy",
        |check, ctx| {
            if let Some(privacy) = find_file(ctx, &["privacy", "gdpr"]) {
                let content = read_lowercase(privacy)?;
                if contains_any(&content, &["retention", "how long"]) {
                    return Ok(CheckResult::passed(
                        check,
                        "Retention policy found in privacy document",
                    ));
                }
            }

            if let Some(found) = find_file(ctx, &["retention", "data-retention", "dataretention"]) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            Ok(CheckResult::failed(check, "No data retention policy found")
                .with_recommendation("Add data retention section to privacy policy")
                .with_reference("GDPR Article 5(1)(e)"))
        },
    )
}

fn breach_notification() -> Check {
    Check::new(
        "GDPR-003",
        "Breach Notification Procedure",
        Category::Gdpr,
        Severity::Critical,
        20,
        "Check for data breach notification procedure (72 hours)",
        |check, ctx| {
            let patterns = ["breach", "incident", "security-incident", "data-breach"];
            if let Some(found) = find_file(ctx, &patterns) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            let target = ctx.root.join("BREACH-PROCEDURE.md");
            let fix = FixAction::new("Create breach notification template").with_remediation(move || {
                write_template(&target, &templates::breach_procedure(CalendarDate::today()))
            });
            Ok(CheckResult::failed(check, "No breach notification procedure found")
                .with_recommendation(
                    "Create incident response plan (GDPR requires 72-hour notification)",
                )
                .with_reference("GDPR Article 33 & 34")
                .with_fix(fix))
        },
    )
}

fn consent_management() -> Check {
    Check::new(
        "GDPR-004",
        "Consent Management",
        Category::Gdpr,
        Severity::High,
        15,
        "Check for consent management implementation",
        |check, ctx| {
            if ctx.has_dependency(CONSENT_LIBRARIES) {
                return Ok(CheckResult::passed(check, "Consent management library found"));
            }
            if let Some(found) = find_file(ctx, &["consent", "cookie"]) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            Ok(
                CheckResult::warning(check, "No consent management detected", check.weight)
                    .with_recommendation(
                        "Implement cookie consent banner (npm: cookieconsent, klaro)",
                    )
                    .with_reference("GDPR Article 7"),
            )
        },
    )
}

fn dpo_contact() -> Check {
    Check::new(
        "GDPR-005",
        "DPO Contact Information",
        Category::Gdpr,
        Severity::Medium,
        10,
        "Check for Data Protection Officer contact",
        |check, ctx| {
            if let Some(privacy) = find_file(ctx, &["privacy", "gdpr"]) {
                let content = read_lowercase(privacy)?;
                let keywords = ["dpo", "data protection officer", "datenschutzbeauftragter"];
                if contains_any(&content, &keywords) {
                    return Ok(CheckResult::passed(
                        check,
                        "DPO information found in privacy policy",
                    ));
                }
            }

            Ok(
                CheckResult::warning(check, "No DPO contact information found", check.weight)
                    .with_recommendation("Add DPO contact to privacy policy")
                    .with_reference("GDPR Article 37-39"),
            )
        },
    )
}
