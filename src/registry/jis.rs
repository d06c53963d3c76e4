//! JTel Identity Standard: bilateral consent and intent verification.

use crate::checker::{Category, Check, CheckResult, Severity};

use super::heuristics::find_file;

pub(super) fn checks() -> Vec<Check> {
    vec![
        bilateral_consent(),
        provenance_trail(),
        intent_verification(),
        signoff_workflow(),
    ]
}

fn bilateral_consent() -> Check {
    Check::new(
        "JIS-001",
        "Bilateral Consent Implementation",
        Category::Jis,
        Severity::High,
        15,
        "Check for bilateral consent mechanism (did:jis)",
        |check, ctx| {
            if ctx.has_dependency(&["did-jis", "@jtel/jis", "jis-consent"]) {
                return Ok(CheckResult::passed(check, "JIS bilateral consent library found"));
            }
            if find_file(ctx, &["consent", "jis", "bilateral"]).is_some() {
                return Ok(CheckResult::passed(check, "Consent implementation found"));
            }

            Ok(
                CheckResult::warning(check, "No bilateral consent mechanism found", check.weight)
                    .with_recommendation("Implement did:jis for bilateral consent (npm: did-jis)")
                    .with_reference("JIS Protocol v1.0"),
            )
        },
    )
}

fn provenance_trail() -> Check {
    Check::new(
        "JIS-002",
        "TIBET Provenance Trail",
        Category::Jis,
        Severity::High,
        15,
        "Check for TIBET provenance implementation",
        |check, ctx| {
            if ctx.has_dependency(&["tibet-vault", "tibet-audit", "mcp-server-tibet"]) {
                return Ok(CheckResult::passed(check, "TIBET provenance library found"));
            }
            if find_file(ctx, &["tibet", "provenance", "audit-trail"]).is_some() {
                return Ok(CheckResult::passed(check, "Provenance documentation found"));
            }

            Ok(
                CheckResult::warning(check, "No TIBET provenance trail found", check.weight)
                    .with_recommendation("Implement TIBET for audit trail (npm: tibet-vault)")
                    .with_reference("IETF draft-vandemeent-tibet-provenance"),
            )
        },
    )
}

fn intent_verification() -> Check {
    Check::new(
        "JIS-003",
        "Intent Verification",
        Category::Jis,
        Severity::Medium,
        10,
        "Check for intent verification (ERACHTER)",
        |check, ctx| {
            if find_file(ctx, &["intent", "erachter", "purpose"]).is_some() {
                return Ok(CheckResult::passed(check, "Intent verification found"));
            }

            Ok(
                CheckResult::warning(check, "No explicit intent verification", check.weight)
                    .with_recommendation(
                        "Document the ERACHTER (intent/why) for data processing",
                    )
                    .with_reference("TIBET ERACHTER principle"),
            )
        },
    )
}

/// Optional outside regulated settings, so a miss is skipped rather than scored.
fn signoff_workflow() -> Check {
    Check::new(
        "JIS-004",
        "Sign-off Workflow",
        Category::Jis,
        Severity::Medium,
        10,
        "Check for human sign-off workflow",
        |check, ctx| {
            if find_file(ctx, &["signoff", "approval", "review"]).is_some() {
                return Ok(CheckResult::passed(check, "Sign-off workflow found"));
            }

            Ok(CheckResult::skipped(
                check,
                "No sign-off workflow (optional for non-regulated)",
            )
            .with_recommendation("Document a human sign-off step for compliance verification")
            .with_reference("JIS Sign-off Protocol"))
        },
    )
}
