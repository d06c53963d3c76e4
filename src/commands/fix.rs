use crate::checker::{
    CheckResult, FixOptions, FixOutcome, FixTally, apply_fixes_with_callback, get_fixable_issues,
};
use crate::cli::{Cli, FixArgs};
use crate::error::Result;
use crate::output::{ColorMode, Painter, ansi};
use crate::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, resolve_scan_options, scan_with_progress};

#[must_use]
pub fn run_fix(args: &FixArgs, cli: &Cli) -> i32 {
    match run_fix_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Scan, list fixable issues and optionally apply their remediations.
///
/// Applies only with `--auto` and without `--wet-wipe`.
///
/// # Errors
/// Returns an error if configuration is invalid or the scan cannot start.
pub fn run_fix_impl(args: &FixArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(&args.path, cli.config.as_deref(), cli.no_config)?;
    let options = resolve_scan_options(&config, &[], args.sovereign);
    let painter = Painter::new(ColorMode::from(cli.color));

    if options.sovereign && !cli.quiet {
        println!("{}", painter.paint("SOVEREIGN MODE", ansi::CYAN));
        println!(
            "{}",
            painter.paint("   All operations run locally. No data leaves your machine.", ansi::DIM)
        );
        println!();
    }

    if !cli.quiet {
        println!("Scanning for fixable issues...");
    }
    let result = scan_with_progress(&args.path, &options, cli.quiet)?;
    let fixable = get_fixable_issues(&result.results);

    if fixable.is_empty() {
        let message = "✓ No fixable issues found! Your compliance is looking good.";
        println!("{}", painter.paint(message, ansi::GREEN));
        return Ok(EXIT_SUCCESS);
    }

    print_fixable(&painter, &fixable);

    if args.dry_run {
        let tally = apply_and_report(&painter, &fixable, FixOptions { dry_run: true });
        println!();
        println!(
            "{}",
            painter.paint(
                &format!(
                    "Wet-wipe mode: {} fix(es) previewed, no changes made. \
                     Run without --wet-wipe to apply fixes.",
                    tally.fixed
                ),
                ansi::YELLOW
            )
        );
        return Ok(EXIT_SUCCESS);
    }

    if !args.auto {
        println!();
        println!("Run with --auto to apply fixes automatically.");
        return Ok(EXIT_SUCCESS);
    }

    println!();
    println!("{}", painter.paint("Applying all fixes...", ansi::YELLOW));
    println!();

    let tally = apply_and_report(&painter, &fixable, FixOptions::default());
    tracing::debug!(fixed = tally.fixed, failed = tally.failed, "fixes applied");

    println!();
    let summary = format!("Done! Fixed: {}, Failed: {}", tally.fixed, tally.failed);
    let code = if tally.failed > 0 { ansi::RED } else { ansi::GREEN };
    println!("{}", painter.paint(&summary, code));
    println!();
    println!(
        "{}",
        painter.paint("Run 'compliance-guard scan' to verify improvements.", ansi::DIM)
    );

    Ok(if tally.failed > 0 {
        EXIT_CHECKS_FAILED
    } else {
        EXIT_SUCCESS
    })
}

fn print_fixable(painter: &Painter, fixable: &[CheckResult]) {
    println!();
    println!("Found {} fixable issue(s):", fixable.len());
    println!();

    for issue in fixable {
        println!(
            "  {} {}: {}",
            painter.status_icon(issue.status),
            painter.paint(&issue.check_id, ansi::CYAN),
            issue.name
        );
        if let Some(fix) = &issue.fix_action {
            let arrow = format!("→ {}", fix.description);
            println!("     {}", painter.paint(&arrow, ansi::DIM));
        }
    }
}

fn apply_and_report(painter: &Painter, fixable: &[CheckResult], options: FixOptions) -> FixTally {
    apply_fixes_with_callback(fixable, options, |issue, outcome| {
        println!("{}", describe_outcome(painter, issue, outcome));
    })
}

fn describe_outcome(painter: &Painter, issue: &CheckResult, outcome: &FixOutcome) -> String {
    match outcome {
        FixOutcome::Previewed => format!("  Would fix: {}", issue.check_id),
        FixOutcome::Fixed => {
            format!("  {} Fixed: {}", painter.paint("✓", ansi::GREEN), issue.check_id)
        }
        FixOutcome::Failed(reason) => format!(
            "  {} Failed: {} ({reason})",
            painter.paint("✗", ansi::RED),
            issue.check_id
        ),
        FixOutcome::Skipped => format!(
            "  {} Skipped: {} (no remediation)",
            painter.paint("-", ansi::DIM),
            issue.check_id
        ),
    }
}

#[cfg(test)]
#[path = "fix_tests.rs"]
mod tests;
