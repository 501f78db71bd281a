use serde::Serialize;

use crate::config::MetricKind;

/// One measured value for one file.
///
/// Function-level measurements carry the function's name and starting line;
/// file-level aggregates carry neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub metric: MetricKind,
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl Measurement {
    #[must_use]
    pub const fn file_level(metric: MetricKind, value: f64) -> Self {
        Self {
            metric,
            value,
            line: None,
            function: None,
        }
    }

    #[must_use]
    pub const fn function_level(
        metric: MetricKind,
        value: f64,
        line: usize,
        function: String,
    ) -> Self {
        Self {
            metric,
            value,
            line: Some(line),
            function: Some(function),
        }
    }
}

/// A detected function or method in a file.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionInfo {
    /// Function name
    pub name: String,
    /// Starting line (1-indexed)
    pub start_line: usize,
    /// Ending line (1-indexed)
    pub end_line: usize,
}

impl FunctionInfo {
    #[must_use]
    pub const fn new(name: String, start_line: usize, end_line: usize) -> Self {
        Self {
            name,
            start_line,
            end_line,
        }
    }
}
