//! EU AI Act. Every check is skipped when no AI library is declared.

use crate::checker::{Category, Check, CheckResult, FixAction, Severity};
use crate::date::CalendarDate;
use crate::error::Result;
use crate::scanner::ScanContext;

use super::heuristics::{contains_any, find_file, found_message, has_ai_libraries, read_lowercase};
use super::templates::{self, write_template};

const LOGGING_LIBRARIES: &[&str] = &["winston", "pino", "bunyan", "log4js", "tibet-vault"];

pub(super) fn checks() -> Vec<Check> {
    vec![
        audit_trail(),
        human_oversight(),
        transparency_notice(),
        risk_assessment(),
    ]
}

/// Wrap a body so it only runs for projects that use AI.
fn ai_check<F>(
    code: &'static str,
    name: &'static str,
    severity: Severity,
    weight: u32,
    description: &'static str,
    body: F,
) -> Check
where
    F: Fn(&Check, &ScanContext) -> Result<CheckResult> + Send + Sync + 'static,
{
    Check::new(code, name, Category::AiAct, severity, weight, description, move |check, ctx| {
        if has_ai_libraries(ctx) {
            body(check, ctx)
        } else {
            Ok(CheckResult::skipped(check, "No AI libraries detected"))
        }
    })
}

fn audit_trail() -> Check {
    ai_check(
        "AIACT-001",
        "AI Decision Audit Trail",
        Severity::Critical,
        20,
        "Check for AI decision logging/audit trail",
        |check, ctx| {
            let patterns = ["audit", "ai-log", "decision-log", "ml-audit", "inference-log"];
            if let Some(found) = find_file(ctx, &patterns) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            if ctx.has_dependency(LOGGING_LIBRARIES) {
                return Ok(CheckResult::warning(
                    check,
                    "Logging library found, but no AI-specific audit trail detected",
                    10,
                )
                .with_recommendation("Record each AI decision with its inputs, model and output"));
            }

            let target = ctx.root.join("AI-AUDIT-TRAIL.md");
            let fix = FixAction::new("Create AI audit trail template").with_remediation(move || {
                write_template(&target, &templates::ai_audit_trail(CalendarDate::today()))
            });
            Ok(CheckResult::failed(check, "No AI decision audit trail found")
                .with_recommendation("Implement logging for AI decisions")
                .with_reference("EU AI Act Article 12 - Record-keeping")
                .with_fix(fix))
        },
    )
}

fn human_oversight() -> Check {
    ai_check(
        "AIACT-002",
        "Human Oversight Mechanism",
        Severity::High,
        15,
        "Check for human oversight in AI decisions",
        |check, ctx| {
            let patterns = ["review", "approval", "human-oversight", "hitl", "moderation"];
            if let Some(found) = find_file(ctx, &patterns) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            Ok(
                CheckResult::warning(check, "No human oversight mechanism detected", check.weight)
                    .with_recommendation("Implement human review for high-risk AI decisions")
                    .with_reference("EU AI Act Article 14 - Human oversight"),
            )
        },
    )
}

fn transparency_notice() -> Check {
    ai_check(
        "AIACT-003",
        "AI Transparency Notice",
        Severity::High,
        15,
        "Check for AI transparency/disclosure",
        |check, ctx| {
            if let Some(readme) = find_file(ctx, &["readme"]) {
                let content = read_lowercase(readme)?;
                if content.contains("ai") && contains_any(&content, &["powered by", "uses"]) {
                    return Ok(CheckResult::passed(check, "AI disclosure found in README"));
                }
            }

            let patterns = ["ai-disclosure", "transparency", "model-card", "ai-notice"];
            if let Some(found) = find_file(ctx, &patterns) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            Ok(
                CheckResult::warning(check, "No AI transparency notice found", check.weight)
                    .with_recommendation("Add AI disclosure to README or create MODEL-CARD.md")
                    .with_reference("EU AI Act Article 13 - Transparency"),
            )
        },
    )
}

fn risk_assessment() -> Check {
    ai_check(
        "AIACT-004",
        "AI Risk Assessment",
        Severity::High,
        15,
        "Check for AI risk assessment documentation",
        |check, ctx| {
            let patterns = ["risk-assessment", "ai-risk", "impact-assessment", "pia", "dpia"];
            if let Some(found) = find_file(ctx, &patterns) {
                return Ok(CheckResult::passed(check, found_message(found)));
            }

            let target = ctx.root.join("AI-RISK-ASSESSMENT.md");
            let fix = FixAction::new("Create AI risk assessment template").with_remediation(move || {
                write_template(&target, &templates::ai_risk_assessment(CalendarDate::today()))
            });
            Ok(CheckResult::failed(check, "No AI risk assessment found")
                .with_recommendation("Create AI risk assessment document")
                .with_reference("EU AI Act Article 9 - Risk management system")
                .with_fix(fix))
        },
    )
}
