use crate::audit::ScanResult;
use crate::cli::{Cli, ScanArgs};
use crate::error::Result;
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, Painter, TextFormatter, ansi,
};
use crate::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, resolve_scan_options, scan_with_progress};

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Scan a project and print the report.
///
/// # Errors
/// Returns an error if configuration is invalid or the scan cannot start.
pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(&args.path, cli.config.as_deref(), cli.no_config)?;
    let options = resolve_scan_options(&config, &args.categories, args.sovereign);
    let color_mode = ColorMode::from(cli.color);
    let text_mode = args.format == OutputFormat::Text;

    if text_mode && options.sovereign && !cli.quiet {
        print_sovereign_banner(Painter::new(color_mode));
    }

    let result = scan_with_progress(&args.path, &options, cli.quiet || !text_mode)?;
    tracing::debug!(
        scan_id = %result.scan_id,
        score = result.score,
        failed = result.failed,
        "scan finished"
    );

    // quiet only hides the banner and spinner
    let output = format_output(args.format, &result, color_mode, cli.verbose)?;
    print!("{output}");

    Ok(exit_code_for(&result))
}

fn print_sovereign_banner(painter: Painter) {
    println!("{}", painter.paint("SOVEREIGN MODE", ansi::CYAN));
    println!(
        "{}",
        painter.paint("   All checks run locally. No data leaves your machine.", ansi::DIM)
    );
}

/// Render a scan result in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_output(
    format: OutputFormat,
    result: &ScanResult,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(result),
        OutputFormat::Json => JsonFormatter.format(result),
    }
}

/// Non-zero iff any check failed.
#[must_use]
pub const fn exit_code_for(result: &ScanResult) -> i32 {
    if result.has_failures() {
        EXIT_CHECKS_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
