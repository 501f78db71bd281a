mod csv;
mod json;
mod progress;
mod stats;
mod text;

use clap::ValueEnum;
use indexmap::IndexMap;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use progress::AnalysisProgress;
pub use stats::{StatsCsvFormatter, StatsJsonFormatter, StatsTextFormatter};
pub use text::TextFormatter;

use crate::aggregator::Summary;
use crate::checker::FileReport;
use crate::error::Result;
use crate::rollup::GroupStats;

/// Output format selection shared by all commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Formats analysis reports plus their summary.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, reports: &[FileReport], summary: &Summary) -> Result<String>;
}

/// Formats rollup statistics keyed by directory path or module name.
pub trait StatsFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, stats: &IndexMap<String, GroupStats>) -> Result<String>;
}
