use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::scanner::ScanContext;

use super::{Category, Check, CheckResult, error_detail, panic_message};

/// Checks to run for a category allow-list, in registry order.
///
/// An empty allow-list selects every check.
#[must_use]
pub fn select_checks<'a>(registry: &'a [Check], categories: &[Category]) -> Vec<&'a Check> {
    registry
        .iter()
        .filter(|check| categories.is_empty() || categories.contains(&check.category))
        .collect()
}

/// Run the selected checks one at a time and collect exactly one result per check.
#[must_use]
pub fn run_checks(
    registry: &[Check],
    ctx: &ScanContext,
    categories: &[Category],
) -> Vec<CheckResult> {
    run_checks_with_callback(registry, ctx, categories, |_, _| {})
}

/// Like [`run_checks`], calling `on_result` after each check completes.
pub fn run_checks_with_callback<F>(
    registry: &[Check],
    ctx: &ScanContext,
    categories: &[Category],
    mut on_result: F,
) -> Vec<CheckResult>
where
    F: FnMut(&Check, &CheckResult),
{
    let selected = select_checks(registry, categories);
    let mut results = Vec::with_capacity(selected.len());

    for check in selected {
        tracing::debug!(code = check.code, "running check");
        let result = evaluate_isolated(check, ctx);
        on_result(check, &result);
        results.push(result);
    }

    results
}

fn evaluate_isolated(check: &Check, ctx: &ScanContext) -> CheckResult {
    let outcome = catch_unwind(AssertUnwindSafe(|| check.evaluate(ctx)));
    let detail = match outcome {
        Ok(Ok(result)) => return normalize(check, result),
        Ok(Err(e)) => error_detail(&e),
        Err(payload) => panic_message(payload.as_ref()),
    };

    tracing::warn!(code = check.code, error = %detail, "check failed to run");
    CheckResult::skipped(check, format!("Check failed to run: {detail}"))
}

/// Bring a check-produced result back in line with its check.
fn normalize(check: &Check, mut result: CheckResult) -> CheckResult {
    if result.score_impact > check.weight {
        tracing::warn!(
            code = check.code,
            impact = result.score_impact,
            weight = check.weight,
            "score impact exceeds weight, clamping"
        );
        result.score_impact = check.weight;
    }

    if result.can_auto_fix && result.remediation().is_none() {
        tracing::warn!(code = check.code, "auto-fix flagged without remediation, clearing");
        result.can_auto_fix = false;
    }

    result
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
