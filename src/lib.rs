pub mod audit;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod output;
pub mod registry;
pub mod scanner;

pub use audit::{ScanOptions, ScanResult, scan};
pub use checker::{FixOptions, FixTally, apply_fixes, get_fixable_issues};
pub use error::{ComplianceGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
