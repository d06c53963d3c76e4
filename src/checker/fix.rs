use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Serialize;

use super::{CheckResult, error_detail, panic_message};

/// Results that are auto-fixable and not passing, in input order.
#[must_use]
pub fn get_fixable_issues(results: &[CheckResult]) -> Vec<CheckResult> {
    results.iter().filter(|r| r.is_fixable()).cloned().collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// Report what would be fixed without running any remediation.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FixTally {
    pub fixed: usize,
    pub failed: usize,
}

/// What happened to one issue in a fix batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// Dry run; counted as fixed without running.
    Previewed,
    Fixed,
    Failed(String),
    /// No remediation attached; counted as neither fixed nor failed.
    Skipped,
}

/// Apply each issue's remediation in order.
#[must_use]
pub fn apply_fixes(issues: &[CheckResult], options: FixOptions) -> FixTally {
    apply_fixes_with_callback(issues, options, |_, _| {})
}

/// Like [`apply_fixes`], reporting each issue's outcome to `on_outcome`.
///
/// Remediations run strictly one after another; a failing or panicking
/// remediation is counted and the batch continues.
pub fn apply_fixes_with_callback<F>(
    issues: &[CheckResult],
    options: FixOptions,
    mut on_outcome: F,
) -> FixTally
where
    F: FnMut(&CheckResult, &FixOutcome),
{
    let mut tally = FixTally::default();

    for issue in issues {
        let outcome = apply_one(issue, options);
        match outcome {
            FixOutcome::Previewed | FixOutcome::Fixed => tally.fixed += 1,
            FixOutcome::Failed(_) => tally.failed += 1,
            FixOutcome::Skipped => {}
        }
        on_outcome(issue, &outcome);
    }

    tally
}

fn apply_one(issue: &CheckResult, options: FixOptions) -> FixOutcome {
    let Some(remediation) = issue.remediation() else {
        return FixOutcome::Skipped;
    };
    if options.dry_run {
        return FixOutcome::Previewed;
    }

    tracing::debug!(code = %issue.check_id, "applying remediation");
    let reason = match catch_unwind(AssertUnwindSafe(remediation.as_ref())) {
        Ok(Ok(true)) => return FixOutcome::Fixed,
        Ok(Ok(false)) => "remediation did not apply".to_string(),
        Ok(Err(e)) => error_detail(&e),
        Err(payload) => panic_message(payload.as_ref()),
    };

    tracing::warn!(code = %issue.check_id, reason = %reason, "remediation failed");
    FixOutcome::Failed(reason)
}

#[cfg(test)]
#[path = "fix_tests.rs"]
mod tests;
