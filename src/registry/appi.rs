//! Japan Act on the Protection of Personal Information.

use crate::checker::{Category, Check, CheckResult, Severity};

use super::heuristics::{find_file, found_message};

pub(super) fn checks() -> Vec<Check> {
    vec![
        privacy_policy(),
        handling_records(),
        cross_border_transfer(),
        pseudonymization(),
    ]
}

fn privacy_policy() -> Check {
    Check::new(
        "APPI-001",
        "Privacy Policy (APPI)",
        Category::Appi,
        Severity::High,
        15,
        "Check for APPI-compliant privacy policy",
        |check, ctx| {
            if let Some(found) = find_file(ctx, &["privacy", "プライバシー"]) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            Ok(CheckResult::failed(check, "No privacy policy found")
                .with_recommendation("Create privacy policy compliant with APPI")
                .with_reference("APPI Article 21"))
        },
    )
}

fn handling_records() -> Check {
    Check::new(
        "APPI-002",
        "Data Handling Records",
        Category::Appi,
        Severity::High,
        15,
        "Check for data handling records",
        |check, ctx| {
            let patterns = ["data-handling", "records", "processing-log"];
            if let Some(found) = find_file(ctx, &patterns) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            Ok(
                CheckResult::warning(check, "No data handling records found", check.weight)
                    .with_recommendation("Maintain records of data handling activities")
                    .with_reference("APPI Article 26"),
            )
        },
    )
}

fn cross_border_transfer() -> Check {
    Check::new(
        "APPI-003",
        "Cross-Border Transfer Rules",
        Category::Appi,
        Severity::High,
        15,
        "Check for cross-border transfer compliance",
        |check, ctx| {
            if find_file(ctx, &["transfer", "cross-border", "international"]).is_some() {
                return Ok(CheckResult::passed(check, "Cross-border documentation found"));
            }

            Ok(CheckResult::warning(
                check,
                "No cross-border transfer documentation",
                check.weight,
            )
            .with_recommendation("Document transfers outside Japan with adequate protection")
            .with_reference("APPI Article 28"))
        },
    )
}

fn pseudonymization() -> Check {
    Check::new(
        "APPI-004",
        "Pseudonymization Support",
        Category::Appi,
        Severity::Medium,
        10,
        "Check for pseudonymization capabilities",
        |check, ctx| {
            if find_file(ctx, &["pseudonym", "anonymize", "mask"]).is_some() {
                return Ok(CheckResult::passed(check, "Pseudonymization documentation found"));
            }

            Ok(
                CheckResult::warning(check, "No pseudonymization documentation", check.weight)
                    .with_recommendation("Consider pseudonymization for enhanced data protection")
                    .with_reference("APPI Article 41"),
            )
        },
    )
}
