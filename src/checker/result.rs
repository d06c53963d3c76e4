use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;

use super::Check;
use super::types::{Category, CheckStatus, Severity};

/// Side-effecting remediation. `Ok(true)` means the fix was applied.
pub type Remediation = Arc<dyn Fn() -> Result<bool> + Send + Sync>;

/// Remediation attached to a non-passing result.
#[derive(Clone, Serialize)]
pub struct FixAction {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip)]
    pub remediation: Option<Remediation>,
}

impl FixAction {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
            remediation: None,
        }
    }

    /// Shell command a user can run instead of the automatic remediation.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    #[must_use]
    pub fn with_remediation<F>(mut self, remediation: F) -> Self
    where
        F: Fn() -> Result<bool> + Send + Sync + 'static,
    {
        self.remediation = Some(Arc::new(remediation));
        self
    }

    #[must_use]
    pub const fn can_remediate(&self) -> bool {
        self.remediation.is_some()
    }
}

impl fmt::Debug for FixAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixAction")
            .field("description", &self.description)
            .field("command", &self.command)
            .field("remediation", &self.remediation.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Result of evaluating one check against a scan context.
///
/// Carries a copy of the originating check's identity so results stay
/// meaningful without the registry. Every status uses the same shape; optional
/// fields are simply absent when they do not apply.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub check_id: String,
    pub name: String,
    pub status: CheckStatus,
    pub severity: Severity,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Points deducted from 100 when not passed (halved for warnings).
    pub score_impact: u32,
    pub can_auto_fix: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_action: Option<FixAction>,
}

impl CheckResult {
    #[must_use]
    pub fn new(check: &Check, status: CheckStatus) -> Self {
        Self {
            check_id: check.code.to_string(),
            name: check.name.to_string(),
            status,
            severity: check.severity,
            category: check.category,
            message: None,
            recommendation: None,
            reference: None,
            score_impact: 0,
            can_auto_fix: false,
            fix_action: None,
        }
    }

    #[must_use]
    pub fn passed(check: &Check, message: impl Into<String>) -> Self {
        Self::new(check, CheckStatus::Passed).with_message(message)
    }

    /// A warning deducting `score_impact` (half of it counts toward the score).
    #[must_use]
    pub fn warning(check: &Check, message: impl Into<String>, score_impact: u32) -> Self {
        Self::new(check, CheckStatus::Warning)
            .with_message(message)
            .with_score_impact(score_impact)
    }

    /// A failure deducting the check's full weight.
    #[must_use]
    pub fn failed(check: &Check, message: impl Into<String>) -> Self {
        Self::new(check, CheckStatus::Failed)
            .with_message(message)
            .with_score_impact(check.weight)
    }

    #[must_use]
    pub fn skipped(check: &Check, message: impl Into<String>) -> Self {
        Self::new(check, CheckStatus::Skipped).with_message(message)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    #[must_use]
    pub const fn with_score_impact(mut self, score_impact: u32) -> Self {
        self.score_impact = score_impact;
        self
    }

    /// Attach a remediation and mark the result auto-fixable.
    #[must_use]
    pub fn with_fix(mut self, fix: FixAction) -> Self {
        self.can_auto_fix = true;
        self.fix_action = Some(fix);
        self
    }

    // Predicate methods

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.status == CheckStatus::Warning
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.status == CheckStatus::Skipped
    }

    /// Auto-fixable and not already passing.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        self.can_auto_fix && !self.is_passed()
    }

    /// The remediation callback, if one is attached.
    #[must_use]
    pub fn remediation(&self) -> Option<&Remediation> {
        self.fix_action.as_ref()?.remediation.as_ref()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
