//! Template documents written by remediations.

use std::path::Path;

use crate::date::CalendarDate;
use crate::error::{ComplianceGuardError, Result};

/// Write `content` to `path`, creating parent directories. Existing files are overwritten.
///
/// # Errors
/// Returns `FileWrite` if the directory or file cannot be written.
pub fn write_template(path: &Path, content: &str) -> Result<bool> {
    let write_error = |source| ComplianceGuardError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, content).map_err(write_error)?;

    tracing::debug!(path = %path.display(), "wrote template");
    Ok(true)
}

#[must_use]
pub fn privacy_policy(today: CalendarDate) -> String {
    format!(
        "# Privacy Policy

## Data Controller
[Your Company Name]

## What Data We Collect
- [List data types]

## Why We Collect It
- [Legal basis under GDPR]

## Your Rights
Under GDPR, you have the right to:
- Access your data
- Rectify inaccurate data
- Erase your data (\"right to be forgotten\")
- Restrict processing
- Data portability
- Object to processing

## Contact
[DPO contact information]

## Updates
Last updated: {today}
"
    )
}

#[must_use]
pub fn breach_procedure(today: CalendarDate) -> String {
    format!(
        "# Data Breach Response Procedure

## GDPR Requirement
Notify supervisory authority within **72 hours** of becoming aware of a breach.

## Steps
1. **Detect** - Identify the breach
2. **Contain** - Stop further data loss
3. **Assess** - Determine scope and impact
4. **Notify** - Inform authorities (72h) and affected individuals
5. **Document** - Record all actions taken
6. **Review** - Prevent future occurrences

## Notification Checklist
- [ ] Nature of the breach
- [ ] Categories of data affected
- [ ] Approximate number of individuals affected
- [ ] Contact details of DPO
- [ ] Likely consequences
- [ ] Measures taken to address the breach

## Contacts
- DPO: [email]
- Supervisory Authority: [authority contact]
- Legal Team: [contact]

Last updated: {today}
"
    )
}

#[must_use]
pub fn ai_audit_trail(today: CalendarDate) -> String {
    format!(
        "# AI Decision Audit Trail

## Purpose
This document describes the logging requirements for AI decisions per EU AI Act.

## What to Log
- Input data (anonymized)
- Model version and parameters
- Output/decision
- Timestamp
- User context (if applicable)
- Confidence scores

## Implementation
Record one structured entry per inference, for example:

```json
{{
  \"type\": \"ai_decision\",
  \"input_hash\": \"sha256:...\",
  \"output\": \"...\",
  \"model\": {{ \"name\": \"...\", \"version\": \"...\" }},
  \"reason\": \"AI inference for user request\",
  \"actor\": \"ai_system\",
  \"timestamp\": \"...\"
}}
```

## Retention
AI decision logs must be retained for the lifetime of the AI system plus 10 years.

Last updated: {today}
"
    )
}

#[must_use]
pub fn ai_risk_assessment(today: CalendarDate) -> String {
    format!(
        "# AI Risk Assessment

## System Overview
- **Name**: [AI System Name]
- **Purpose**: [What the AI does]
- **Risk Category**: [ ] Minimal [ ] Limited [ ] High [ ] Unacceptable

## Risk Classification (EU AI Act)
### High-Risk Indicators
- [ ] Biometric identification
- [ ] Critical infrastructure
- [ ] Education/vocational training
- [ ] Employment decisions
- [ ] Essential services access
- [ ] Law enforcement
- [ ] Migration/asylum

## Identified Risks
| Risk | Likelihood | Impact | Mitigation |
|------|------------|--------|------------|
| [Risk 1] | Low/Med/High | Low/Med/High | [Mitigation] |

## Mitigation Measures
1. [Measure 1]
2. [Measure 2]

## Review Schedule
- Next review: [Date]
- Reviewed by: [Name]

Last updated: {today}
"
    )
}

/// RFC 9116 disclosure file, expiring at the end of next year.
#[must_use]
pub fn security_txt(today: CalendarDate) -> String {
    let expires_year = u32::from(today.year) + 1;
    format!(
        "Contact: security@example.com
Expires: {expires_year}-12-31T23:59:00.000Z
Preferred-Languages: en, nl
Canonical: https://example.com/.well-known/security.txt
Policy: https://example.com/security-policy

# NIS2 Compliance: Vulnerability Disclosure
# Update contact info and URLs before deploying
"
    )
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod tests;
