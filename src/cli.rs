use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::Category;
use crate::config::LOCAL_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "compliance-guard")]
#[command(author, version, about = "Static compliance heuristics scanner for project directories")]
#[command(long_about = "Runs GDPR, AI Act, NIS2 and regional privacy checks against a project \
    directory, scores the result and can generate missing compliance documents.\n\n\
    Exit codes:\n  \
    0 - No failed checks\n  \
    1 - At least one check failed (or a fix could not be applied)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project and print its compliance score
    Scan(ScanArgs),

    /// List and apply automatic remediations
    Fix(FixArgs),

    /// List the available checks or describe one
    Checks(ChecksArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only run these categories (comma-separated, e.g. gdpr,nis2)
    #[arg(short, long, value_delimiter = ',')]
    pub categories: Vec<Category>,

    /// Output format [possible values: text, json]
    #[arg(short = 'o', long = "output", default_value = "text")]
    pub format: OutputFormat,

    /// Sovereign mode: flag foreign cloud dependencies as hard requirements
    #[arg(long)]
    pub sovereign: bool,
}

#[derive(Parser, Debug)]
pub struct FixArgs {
    /// Project directory to fix
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Apply all fixes without asking
    #[arg(short, long)]
    pub auto: bool,

    /// Preview fixes without writing anything
    #[arg(short = 'w', long = "wet-wipe", visible_alias = "dry-run", short_alias = 'n')]
    pub dry_run: bool,

    /// Sovereign mode: flag foreign cloud dependencies as hard requirements
    #[arg(long)]
    pub sovereign: bool,
}

#[derive(Parser, Debug)]
pub struct ChecksArgs {
    /// Show details for a single check code (e.g. NIS2-007)
    pub code: Option<String>,

    /// Only list these categories (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub categories: Vec<Category>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
