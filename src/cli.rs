use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "metric-guard")]
#[command(author, version, about = "Code complexity guard - measure metrics and enforce thresholds")]
#[command(long_about = "Classifies source files by language, measures complexity metrics, and \
    checks them against configurable thresholds.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Threshold violations found\n  \
    2 - Configuration or input error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze files and check metric thresholds
    Check(CheckArgs),

    /// Display rollup statistics by directory or module
    Stats(StatsArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to analyze (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Glob patterns selecting files, relative to the base directory
    #[arg(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Threshold overrides in metric_kind=value form (repeatable)
    #[arg(short = 't', long = "threshold")]
    pub thresholds: Vec<String>,

    /// Force-include patterns, winning over ignore patterns (repeatable)
    #[arg(short = 'i', long = "include")]
    pub include: Vec<String>,

    /// Additional ignore patterns (repeatable)
    #[arg(short = 'e', long = "exclude")]
    pub exclude: Vec<String>,

    /// Do not merge .gitignore patterns
    #[arg(long)]
    pub no_gitignore: bool,

    /// Analyze everything, ignoring all exclusion rules
    #[arg(long)]
    pub force_analyze: bool,

    /// Base directory for pattern matching and relative paths
    #[arg(short = 'd', long, default_value = ".")]
    pub directory: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Paths to analyze (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Glob patterns selecting files, relative to the base directory
    #[arg(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Force-include patterns, winning over ignore patterns (repeatable)
    #[arg(short = 'i', long = "include")]
    pub include: Vec<String>,

    /// Additional ignore patterns (repeatable)
    #[arg(short = 'e', long = "exclude")]
    pub exclude: Vec<String>,

    /// Do not merge .gitignore patterns
    #[arg(long)]
    pub no_gitignore: bool,

    /// Analyze everything, ignoring all exclusion rules
    #[arg(long)]
    pub force_analyze: bool,

    /// Base directory for pattern matching and relative paths
    #[arg(short = 'd', long, default_value = ".")]
    pub directory: PathBuf,

    /// Group statistics by directory (the default)
    #[arg(long, conflicts_with = "by_module")]
    pub by_directory: bool,

    /// Group statistics by package module instead of directory
    #[arg(long)]
    pub by_module: bool,

    /// Directory depth to display (0 = unlimited, default: 1)
    #[arg(long, default_value_t = 1)]
    pub depth: usize,

    /// Restrict displayed averages to these metrics (repeatable)
    #[arg(short = 'm', long = "metric")]
    pub metrics: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the generated configuration
    #[arg(short, long, default_value = ".metric-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}
