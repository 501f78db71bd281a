use crate::error::{MetricGuardError, Result};

use super::MetricKind;

/// Allowed numeric range for a metric threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRange {
    pub min: f64,
    pub max: Option<f64>,
    pub integer: bool,
}

/// Static range table for threshold validation.
///
/// Config files and CLI overrides are validated against the same table.
#[must_use]
pub const fn range_for(metric: MetricKind) -> ThresholdRange {
    match metric {
        MetricKind::CyclomaticComplexity => ThresholdRange {
            min: 1.0,
            max: Some(50.0),
            integer: true,
        },
        MetricKind::CognitiveComplexity => ThresholdRange {
            min: 1.0,
            max: Some(100.0),
            integer: true,
        },
        MetricKind::MaintainabilityIndex => ThresholdRange {
            min: 0.0,
            max: Some(100.0),
            integer: false,
        },
        MetricKind::HalsteadVolume => ThresholdRange {
            min: 0.0,
            max: Some(100_000.0),
            integer: false,
        },
        MetricKind::HalsteadDifficulty => ThresholdRange {
            min: 0.0,
            max: Some(100.0),
            integer: false,
        },
        MetricKind::HalsteadEffort => ThresholdRange {
            min: 0.0,
            max: Some(1_000_000.0),
            integer: false,
        },
        MetricKind::LinesOfCode => ThresholdRange {
            min: 0.0,
            max: None,
            integer: true,
        },
    }
}

/// Validate a threshold value against the range table.
///
/// # Errors
/// Returns `InvalidOverride` when the value is non-finite, out of range, or
/// fractional for an integer-valued metric.
pub fn validate_threshold(metric: MetricKind, value: f64) -> Result<()> {
    let range = range_for(metric);

    if !value.is_finite() {
        return Err(MetricGuardError::InvalidOverride(format!(
            "{metric} threshold must be a finite number, got {value}"
        )));
    }

    if range.integer && value.fract() != 0.0 {
        return Err(MetricGuardError::InvalidOverride(format!(
            "{metric} threshold must be an integer, got {value}"
        )));
    }

    let in_range = value >= range.min && range.max.is_none_or(|max| value <= max);
    if !in_range {
        let bounds = range.max.map_or_else(
            || format!("at least {}", range.min),
            |max| format!("between {} and {max}", range.min),
        );
        return Err(MetricGuardError::InvalidOverride(format!(
            "{metric} threshold must be {bounds}, got {value}"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
