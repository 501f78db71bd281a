use serde::Serialize;

use crate::aggregator::Summary;
use crate::checker::FileReport;
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: &'a Summary,
    files: &'a [FileReport],
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport], summary: &Summary) -> Result<String> {
        let output = JsonOutput {
            summary,
            files: reports,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
