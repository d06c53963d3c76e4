use std::fmt::Write;

use crate::checker::{Category, Check, select_checks};
use crate::cli::{ChecksArgs, Cli};
use crate::error::{ComplianceGuardError, Result};
use crate::output::{ColorMode, Painter, ansi};
use crate::registry::{find_check, registry};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_checks_list(args: &ChecksArgs, cli: &Cli) -> i32 {
    match run_checks_list_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the built-in checks in registry order, or one check in detail.
///
/// # Errors
/// Returns an error if `args.code` names no known check.
pub fn run_checks_list_impl(args: &ChecksArgs, cli: &Cli) -> Result<()> {
    let painter = Painter::new(ColorMode::from(cli.color));

    if let Some(code) = &args.code {
        let check = find_check(code)
            .ok_or_else(|| ComplianceGuardError::Config(format!("Unknown check: {code}")))?;
        print!("{}", format_check_detail(check, &painter));
        return Ok(());
    }

    let checks = select_checks(registry(), &args.categories);
    print!("{}", format_check_list(&checks, &painter, cli.verbose));
    Ok(())
}

#[must_use]
pub fn format_check_list(checks: &[&Check], painter: &Painter, verbose: u8) -> String {
    let mut output = String::new();
    let mut current: Option<Category> = None;

    for check in checks {
        if current != Some(check.category) {
            if current.is_some() {
                writeln!(output).ok();
            }
            let label = check.category.as_str().to_uppercase();
            writeln!(output, "{}", painter.paint(&label, ansi::BOLD)).ok();
            current = Some(check.category);
        }

        writeln!(
            output,
            "  {} {:<8} {:>3}  {}",
            painter.paint(&format!("{:<10}", check.code), ansi::CYAN),
            check.severity.as_str(),
            check.weight,
            check.name
        )
        .ok();
        if verbose > 0 {
            writeln!(output, "             {}", painter.paint(check.description, ansi::DIM)).ok();
        }
    }

    writeln!(output).ok();
    writeln!(output, "{} check(s)", checks.len()).ok();
    output
}

#[must_use]
pub fn format_check_detail(check: &Check, painter: &Painter) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{}: {}",
        painter.paint(check.code, ansi::CYAN),
        painter.paint(check.name, ansi::BOLD)
    )
    .ok();
    writeln!(output, "  Category:  {}", check.category).ok();
    writeln!(output, "  Severity:  {}", check.severity).ok();
    writeln!(output, "  Weight:    {}", check.weight).ok();
    writeln!(output, "  {}", check.description).ok();
    output
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
