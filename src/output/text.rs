use std::fmt::Write;

use indexmap::IndexMap;

use crate::audit::ScanResult;
use crate::checker::{Category, CheckResult, CheckStatus, Grade};
use crate::error::Result;

use super::OutputFormatter;

const TOP_FAILURES: usize = 3;
const TOP_WARNINGS: usize = 2;
const RULE_WIDTH: usize = 60;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
pub mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in ANSI codes when colors are enabled.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    use_colors: bool,
}

impl Painter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self { use_colors: false }
    }

    #[must_use]
    pub fn paint(&self, text: &str, code: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn status_icon(&self, status: CheckStatus) -> String {
        match status {
            CheckStatus::Passed => self.paint("✓", ansi::GREEN),
            CheckStatus::Warning => self.paint("!", ansi::YELLOW),
            CheckStatus::Failed => self.paint("✗", ansi::RED),
            CheckStatus::Skipped => self.paint("-", ansi::DIM),
        }
    }

    fn grade(&self, grade: Grade) -> String {
        let code = match grade {
            Grade::A | Grade::B => ansi::GREEN,
            Grade::C | Grade::D => ansi::YELLOW,
            Grade::F => ansi::RED,
        };
        self.paint(&grade.to_string(), code)
    }
}

/// Human-readable compliance report.
pub struct TextFormatter {
    painter: Painter,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            painter: Painter::new(mode),
            verbose,
        }
    }

    fn write_header(&self, output: &mut String, result: &ScanResult) {
        writeln!(output).ok();
        writeln!(
            output,
            "{} {}/100 (Grade: {})",
            self.painter.paint("COMPLIANCE HEALTH SCORE:", ansi::BOLD),
            result.score,
            self.painter.grade(result.grade)
        )
        .ok();
        writeln!(output).ok();
    }

    fn write_categories(&self, output: &mut String, results: &[CheckResult]) {
        let mut by_category: IndexMap<Category, Vec<&CheckResult>> = IndexMap::new();
        for result in results {
            by_category.entry(result.category).or_default().push(result);
        }

        for (category, checks) in &by_category {
            let passed = checks.iter().filter(|c| c.is_passed()).count();
            let total = checks.iter().filter(|c| !c.is_skipped()).count();
            if total == 0 {
                continue;
            }

            let label = category.as_str().to_uppercase();
            writeln!(
                output,
                "{}: {passed}/{total} passed",
                self.painter.paint(&label, ansi::CYAN)
            )
            .ok();

            if self.verbose > 0 {
                for check in checks {
                    self.write_check_line(output, check);
                }
                writeln!(output).ok();
            }
        }
    }

    fn write_check_line(&self, output: &mut String, check: &CheckResult) {
        writeln!(
            output,
            "  {} {}",
            self.painter.status_icon(check.status),
            check.name
        )
        .ok();
        if check.is_passed() {
            return;
        }
        if let Some(message) = &check.message {
            writeln!(output, "    {}", self.painter.paint(message, ansi::DIM)).ok();
        }
        if self.verbose > 1
            && let Some(reference) = &check.reference
        {
            writeln!(output, "    {}", self.painter.paint(reference, ansi::DIM)).ok();
        }
    }

    fn write_priorities(&self, output: &mut String, results: &[CheckResult]) {
        let failed = results.iter().filter(|r| r.is_failed()).take(TOP_FAILURES);
        let warnings = results.iter().filter(|r| r.is_warning()).take(TOP_WARNINGS);
        let priorities: Vec<&CheckResult> = failed.chain(warnings).collect();
        if priorities.is_empty() {
            return;
        }

        writeln!(output).ok();
        writeln!(output, "{}", self.painter.paint("TOP PRIORITIES:", ansi::BOLD)).ok();
        for (index, issue) in priorities.iter().enumerate() {
            let code = if issue.is_failed() {
                ansi::RED
            } else {
                ansi::YELLOW
            };
            let tag = format!("[{}]", issue.severity.as_str().to_uppercase());
            writeln!(
                output,
                "  {}. {} {}",
                index + 1,
                self.painter.paint(&tag, code),
                issue.name
            )
            .ok();
            if let Some(recommendation) = &issue.recommendation {
                let arrow = format!("→ {recommendation}");
                writeln!(output, "     {}", self.painter.paint(&arrow, ansi::DIM)).ok();
            }
        }
    }

    fn write_footer(&self, output: &mut String, result: &ScanResult) {
        let fixable = result.fixable_count();
        if fixable > 0 {
            writeln!(output).ok();
            writeln!(output, "{fixable} issue(s) can be auto-fixed:").ok();
            writeln!(
                output,
                "   {}",
                self.painter.paint("compliance-guard fix --auto", ansi::CYAN)
            )
            .ok();
        }

        writeln!(output).ok();
        writeln!(output, "{}", self.painter.paint(&"─".repeat(RULE_WIDTH), ansi::DIM)).ok();
        let stats = format!(
            "Scanned in {}ms | Passed: {} | Warnings: {} | Failed: {} | Skipped: {}",
            result.duration_ms, result.passed, result.warnings, result.failed, result.skipped
        );
        writeln!(output, "{}", self.painter.paint(&stats, ansi::DIM)).ok();

        if result.sovereign {
            writeln!(
                output,
                "{}",
                self.painter
                    .paint("Sovereign mode: No data left your machine", ansi::CYAN)
            )
            .ok();
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &ScanResult) -> Result<String> {
        let mut output = String::new();

        self.write_header(&mut output, result);
        self.write_categories(&mut output, &result.results);
        self.write_priorities(&mut output, &result.results);
        self.write_footer(&mut output, result);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
