use std::fmt::Write;

use crate::aggregator::Summary;
use crate::checker::FileReport;
use crate::error::Result;

use super::ReportFormatter;

/// Plain-text report output: one line per violation, then a summary block.
#[derive(Default)]
pub struct TextFormatter {
    files_found: Option<usize>,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { files_found: None }
    }

    /// Report the scanner's file count next to the analyzed count, making
    /// unsupported-language skips visible in aggregate.
    #[must_use]
    pub const fn with_files_found(mut self, files_found: usize) -> Self {
        self.files_found = Some(files_found);
        self
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport], summary: &Summary) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            for violation in &report.violations {
                let _ = writeln!(output, "{}", violation.message);
            }
            if let Some(error) = &report.error {
                let _ = writeln!(output, "{}: analysis failed: {error}", report.path.display());
            }
        }

        if !output.is_empty() {
            output.push('\n');
        }

        output.push_str("Summary:\n");
        if let Some(found) = self.files_found {
            let _ = writeln!(output, "  Files found: {found}");
        }
        let _ = writeln!(output, "  Files analyzed: {}", summary.total_files);
        let _ = writeln!(
            output,
            "  Files with violations: {}",
            summary.files_with_violations
        );
        let _ = writeln!(output, "  Total violations: {}", summary.total_violations);

        if !summary.violations_by_kind.is_empty() {
            output.push_str("  Violations by metric:\n");
            for (metric, count) in &summary.violations_by_kind {
                let _ = writeln!(output, "    {metric}: {count}");
            }
        }

        if !summary.files_by_language.is_empty() {
            output.push_str("  Files by language:\n");
            for (language, count) in &summary.files_by_language {
                let _ = writeln!(output, "    {language}: {count}");
            }
        }

        let _ = writeln!(
            output,
            "\nResult: {}",
            if summary.success { "PASSED" } else { "FAILED" }
        );

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
