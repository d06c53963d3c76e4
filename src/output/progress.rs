use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner over check execution.
///
/// Disabled in quiet mode or when stderr is not a TTY.
pub struct CheckProgress {
    progress_bar: ProgressBar,
}

impl CheckProgress {
    /// Creates a progress indicator for `total` checks, drawn on stderr.
    ///
    /// # Panics
    ///
    /// This function will panic if the progress bar template is invalid.
    /// The template is a compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Checking {pos}/{len} {msg}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb
    }

    /// Record one finished check.
    pub fn inc(&self, code: &str) {
        self.progress_bar.set_message(code.to_string());
        self.progress_bar.inc(1);
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
