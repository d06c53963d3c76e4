use crate::audit::ScanResult;
use crate::error::Result;

use super::OutputFormatter;

/// Pretty-printed `ScanResult`. Remediation callbacks are never serialized.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &ScanResult) -> Result<String> {
        let mut output = serde_json::to_string_pretty(result)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
