use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analyzer::Measurement;
use crate::config::{ComparisonOperator, MetricKind, ThresholdRule};

/// A measurement that failed its threshold rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub path: PathBuf,
    pub metric: MetricKind,
    pub value: f64,
    pub threshold: f64,
    pub comparison: ComparisonOperator,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    pub message: String,
}

/// Compare one measurement against one threshold rule.
///
/// The threshold is the allowed boundary, so a `<= 10` rule flags only
/// values strictly greater than 10, and symmetrically for the other
/// operators. Disabled rules never produce violations.
#[must_use]
pub fn check_measurement(
    path: &Path,
    measurement: &Measurement,
    rule: &ThresholdRule,
) -> Option<Violation> {
    if !rule.enabled {
        return None;
    }

    let value = measurement.value;
    let threshold = rule.threshold;

    #[allow(clippy::float_cmp)]
    let violated = match rule.comparison {
        ComparisonOperator::Lt => value >= threshold,
        ComparisonOperator::Le => value > threshold,
        ComparisonOperator::Gt => value <= threshold,
        ComparisonOperator::Ge => value < threshold,
        ComparisonOperator::Eq => value != threshold,
        ComparisonOperator::Ne => value == threshold,
    };

    if !violated {
        return None;
    }

    let message = build_message(
        path,
        measurement.metric,
        value,
        threshold,
        rule.comparison,
        measurement.line,
        measurement.function.as_deref(),
    );

    Some(Violation {
        path: path.to_path_buf(),
        metric: measurement.metric,
        value,
        threshold,
        comparison: rule.comparison,
        line: measurement.line,
        function: measurement.function.clone(),
        message,
    })
}

/// Deterministic message: same fields, same string, no locale dependence.
fn build_message(
    path: &Path,
    metric: MetricKind,
    value: f64,
    threshold: f64,
    comparison: ComparisonOperator,
    line: Option<usize>,
    function: Option<&str>,
) -> String {
    let mut location = path.display().to_string();
    if let Some(line) = line {
        location.push_str(&format!(":{line}"));
    }
    if let Some(function) = function {
        location.push_str(&format!(" ({function})"));
    }

    format!(
        "{location}: {} is {value:.2} (threshold: {comparison} {threshold})",
        metric.display_name()
    )
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
