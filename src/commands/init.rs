use std::fs;

use crate::cli::InitArgs;
use crate::error::{ComplianceGuardError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ComplianceGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        ComplianceGuardError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# compliance-guard configuration file

[scan]
# Categories to check (empty = all). Known categories:
# gdpr, ai_act, nis2, pipa, appi, pdpa, lgpd, gulf, ndpr, jis,
# sovereignty, provider, penguin
categories = []

# Treat foreign cloud dependencies as hard requirements to remove
sovereign = false

# Directory levels walked below the scan root (default: 3)
max_depth = 3

# Extra exclude patterns (glob syntax, relative to the scan root).
# Hidden entries and node_modules are always skipped.
exclude = [
    "**/target/**",
    "**/vendor/**",
]
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
