use std::fmt::Write;

use crate::aggregator::Summary;
use crate::checker::FileReport;
use crate::error::Result;

use super::ReportFormatter;

/// CSV report output: one row per violation.
pub struct CsvFormatter;

const HEADER: &str = "file,language,metric,value,threshold,comparison,line,function";

impl ReportFormatter for CsvFormatter {
    fn format(&self, reports: &[FileReport], _summary: &Summary) -> Result<String> {
        let mut output = String::new();
        output.push_str(HEADER);
        output.push('\n');

        for report in reports {
            for violation in &report.violations {
                let _ = writeln!(
                    output,
                    "{},{},{},{:.2},{},{},{},{}",
                    escape(&violation.path.display().to_string()),
                    report.language,
                    violation.metric,
                    violation.value,
                    violation.threshold,
                    escape(violation.comparison.as_str()),
                    violation.line.map_or_else(String::new, |l| l.to_string()),
                    escape(violation.function.as_deref().unwrap_or("")),
                );
            }
        }

        Ok(output)
    }
}

/// Minimal CSV quoting: wrap fields containing separators or quotes.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
