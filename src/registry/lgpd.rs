//! Brazil Lei Geral de Proteção de Dados.

use crate::checker::{Category, Check, CheckResult, Severity};

use super::heuristics::{contains_any, find_file, read_lowercase};

pub(super) fn checks() -> Vec<Check> {
    vec![
        legal_basis(),
        encarregado(),
        subject_rights(),
        breach_notification(),
    ]
}

fn legal_basis() -> Check {
    Check::new(
        "LGPD-001",
        "Legal Basis for Processing",
        Category::Lgpd,
        Severity::High,
        15,
        "Check for documented legal basis",
        |check, ctx| {
            if let Some(found) = find_file(ctx, &["legal-basis", "privacy", "lgpd"]) {
                let content = read_lowercase(found)?;
                if contains_any(&content, &["legal basis", "base legal", "consent"]) {
                    return Ok(CheckResult::passed(check, "Legal basis documentation found"));
                }
            }

            Ok(CheckResult::warning(
                check,
                "No documented legal basis for processing",
                check.weight,
            )
            .with_recommendation("Document legal basis per LGPD Article 7")
            .with_reference("LGPD Article 7"))
        },
    )
}

fn encarregado() -> Check {
    Check::new(
        "LGPD-002",
        "Encarregado (DPO)",
        Category::Lgpd,
        Severity::High,
        15,
        "Check for Encarregado/DPO designation",
        |check, ctx| {
            let patterns = ["dpo", "encarregado", "officer", "privacy"];
            if let Some(found) = find_file(ctx, &patterns) {
                let content = read_lowercase(found)?;
                if contains_any(&content, &["encarregado", "dpo", "officer"]) {
                    return Ok(CheckResult::passed(check, "Encarregado designation found"));
                }
            }

            Ok(CheckResult::warning(
                check,
                "No Encarregado (DPO) designation found",
                check.weight,
            )
            .with_recommendation("Designate an Encarregado (Data Protection Officer)")
            .with_reference("LGPD Article 41"))
        },
    )
}

fn subject_rights() -> Check {
    Check::new(
        "LGPD-003",
        "Data Subject Rights (ARCO)",
        Category::Lgpd,
        Severity::High,
        15,
        "Check for ARCO rights implementation",
        |check, ctx| {
            if find_file(ctx, &["rights", "arco", "subject-rights"]).is_some() {
                return Ok(CheckResult::passed(
                    check,
                    "Data subject rights documentation found",
                ));
            }

            Ok(
                CheckResult::warning(check, "No ARCO rights implementation found", check.weight)
                    .with_recommendation(
                        "Implement Access, Rectification, Cancellation, Opposition rights",
                    )
                    .with_reference("LGPD Article 18"),
            )
        },
    )
}

fn breach_notification() -> Check {
    Check::new(
        "LGPD-004",
        "Breach Notification",
        Category::Lgpd,
        Severity::Critical,
        20,
        "Check for breach notification procedure",
        |check, ctx| {
            if find_file(ctx, &["breach", "incident", "notification"]).is_some() {
                return Ok(CheckResult::passed(check, "Breach notification procedure found"));
            }

            Ok(CheckResult::failed(check, "No breach notification procedure")
                .with_recommendation("Create breach notification procedure for ANPD")
                .with_reference("LGPD Article 48"))
        },
    )
}
