use serde::Serialize;

use super::{CheckResult, CheckStatus};

/// Points deducted by a result set. Warnings cost half their impact.
#[must_use]
pub fn total_deductions(results: &[CheckResult]) -> f64 {
    results
        .iter()
        .map(|r| match r.status {
            CheckStatus::Failed => f64::from(r.score_impact),
            CheckStatus::Warning => f64::from(r.score_impact) / 2.0,
            CheckStatus::Passed | CheckStatus::Skipped => 0.0,
        })
        .sum()
}

/// Score in `0..=100`, rounded once after summing.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_score(results: &[CheckResult]) -> u8 {
    // clamped to 0..=100 before the cast
    (100.0 - total_deductions(results)).round().clamp(0.0, 100.0) as u8
}

/// Result counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn from_results(results: &[CheckResult]) -> Self {
        results.iter().fold(Self::default(), |mut counts, r| {
            match r.status {
                CheckStatus::Passed => counts.passed += 1,
                CheckStatus::Warning => counts.warnings += 1,
                CheckStatus::Failed => counts.failed += 1,
                CheckStatus::Skipped => counts.skipped += 1,
            }
            counts
        })
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.warnings + self.failed + self.skipped
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
