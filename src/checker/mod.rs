mod executor;
mod fix;
mod result;
mod score;
mod types;

pub use executor::{run_checks, run_checks_with_callback, select_checks};
pub use fix::{
    FixOptions, FixOutcome, FixTally, apply_fixes, apply_fixes_with_callback, get_fixable_issues,
};
pub use result::{CheckResult, FixAction, Remediation};
pub use score::{StatusCounts, compute_score, total_deductions};
pub use types::{Category, CheckStatus, Grade, Severity};

use std::fmt;

use crate::error::Result;
use crate::scanner::ScanContext;

/// Evaluation body of a check.
pub type Evaluate = Box<dyn Fn(&Check, &ScanContext) -> Result<CheckResult> + Send + Sync>;

/// A single named compliance heuristic.
///
/// Checks are plain records; the varying part is the `evaluate` closure.
pub struct Check {
    pub code: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub severity: Severity,
    /// Maximum points this check can deduct.
    pub weight: u32,
    pub description: &'static str,
    evaluate: Evaluate,
}

impl Check {
    #[must_use]
    pub fn new<F>(
        code: &'static str,
        name: &'static str,
        category: Category,
        severity: Severity,
        weight: u32,
        description: &'static str,
        evaluate: F,
    ) -> Self
    where
        F: Fn(&Self, &ScanContext) -> Result<CheckResult> + Send + Sync + 'static,
    {
        Self {
            code,
            name,
            category,
            severity,
            weight,
            description,
            evaluate: Box::new(evaluate),
        }
    }

    /// Run the check body. Errors and panics are not contained here; see
    /// [`run_checks`].
    pub fn evaluate(&self, ctx: &ScanContext) -> Result<CheckResult> {
        (self.evaluate)(self, ctx)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("severity", &self.severity)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// An error's message followed by each underlying cause not already shown.
pub(crate) fn error_detail(err: &dyn std::error::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        source = cause.source();
    }
    detail
}

/// Render a panic payload as text.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic".to_string())
}
