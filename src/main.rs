use clap::Parser;
use tracing_subscriber::EnvFilter;

use compliance_guard::cli::{Cli, Commands};
use compliance_guard::commands::{run_checks_list, run_fix, run_init, run_scan};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Fix(args) => run_fix(args, &cli),
        Commands::Checks(args) => run_checks_list(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

/// Diagnostics go to stderr so stdout stays clean for reports and JSON.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
