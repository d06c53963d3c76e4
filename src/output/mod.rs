mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::CheckProgress;
pub use text::{ColorMode, Painter, TextFormatter, ansi};

use crate::audit::ScanResult;
use crate::error::Result;

/// Trait for rendering a scan into an output format.
pub trait OutputFormatter {
    /// Format the scan result into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, result: &ScanResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "terminal" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
