use std::fmt::Write;

use indexmap::IndexMap;

use crate::config::MetricKind;
use crate::error::Result;
use crate::rollup::GroupStats;

use super::StatsFormatter;

/// Plain-text rollup statistics.
pub struct StatsTextFormatter {
    heading: String,
    metrics: Vec<MetricKind>,
}

impl StatsTextFormatter {
    /// `heading` names the grouping, e.g. "directory" or "module".
    #[must_use]
    pub fn new(heading: &str) -> Self {
        Self {
            heading: heading.to_string(),
            metrics: Vec::new(),
        }
    }

    /// Restrict the displayed averages to the given metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Vec<MetricKind>) -> Self {
        self.metrics = metrics;
        self
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &IndexMap<String, GroupStats>) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "Statistics by {}:", self.heading);

        for (group, entry) in stats {
            let _ = writeln!(output, "\n{group}");
            let _ = writeln!(output, "  files: {}", entry.file_count);
            let _ = writeln!(output, "  functions: {}", entry.function_count);
            for (metric, average) in &entry.averages {
                if self.metrics.is_empty() || self.metrics.contains(metric) {
                    let _ = writeln!(output, "  avg {metric}: {average:.2}");
                }
            }
        }

        if stats.is_empty() {
            output.push_str("\n(no groups)\n");
        }

        Ok(output)
    }
}

/// JSON rollup statistics: the map serializes directly.
pub struct StatsJsonFormatter;

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, stats: &IndexMap<String, GroupStats>) -> Result<String> {
        let mut json = serde_json::to_string_pretty(stats)?;
        json.push('\n');
        Ok(json)
    }
}

/// CSV rollup statistics: one row per group, averages as columns.
pub struct StatsCsvFormatter;

impl StatsFormatter for StatsCsvFormatter {
    fn format(&self, stats: &IndexMap<String, GroupStats>) -> Result<String> {
        // Columns cover every metric present in any group, in metric order.
        let columns: Vec<MetricKind> = MetricKind::ALL
            .into_iter()
            .filter(|kind| stats.values().any(|entry| entry.averages.contains_key(kind)))
            .collect();

        let mut output = String::from("group,file_count,function_count");
        for kind in &columns {
            let _ = write!(output, ",avg_{kind}");
        }
        output.push('\n');

        for (group, entry) in stats {
            let _ = write!(
                output,
                "{},{},{}",
                escape(group),
                entry.file_count,
                entry.function_count
            );
            for kind in &columns {
                match entry.averages.get(kind) {
                    Some(average) => {
                        let _ = write!(output, ",{average:.2}");
                    }
                    None => output.push(','),
                }
            }
            output.push('\n');
        }

        Ok(output)
    }
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
