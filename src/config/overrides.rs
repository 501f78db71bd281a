use indexmap::IndexMap;

use crate::error::{MetricGuardError, Result};

use super::{Config, MetricKind, validate_threshold};

/// Command-line overrides layered on top of the loaded configuration.
///
/// Overrides are collected first and applied as one non-mutating merge, so
/// the loaded config is never modified in place.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOverride {
    /// Patterns to force-include (win over ignore patterns).
    pub include_patterns: Vec<String>,
    /// Additional ignore patterns.
    pub exclude_patterns: Vec<String>,
    /// Threshold replacements keyed by metric.
    pub threshold_overrides: IndexMap<MetricKind, f64>,
    /// Skip merging `.gitignore` patterns.
    pub disable_gitignore: bool,
    /// Analyze everything, ignoring all exclusion rules.
    pub force_analyze: bool,
}

impl AnalysisOverride {
    pub fn add_include_pattern(&mut self, pattern: &str) {
        if !self.include_patterns.iter().any(|p| p == pattern) {
            self.include_patterns.push(pattern.to_string());
        }
    }

    pub fn add_exclude_pattern(&mut self, pattern: &str) {
        if !self.exclude_patterns.iter().any(|p| p == pattern) {
            self.exclude_patterns.push(pattern.to_string());
        }
    }

    /// Record a threshold override, validating the value range.
    ///
    /// # Errors
    /// Returns `InvalidOverride` when the value is outside the metric's
    /// allowed range.
    pub fn set_threshold(&mut self, metric: MetricKind, value: f64) -> Result<()> {
        validate_threshold(metric, value)?;
        self.threshold_overrides.insert(metric, value);
        Ok(())
    }

    /// Parse a `metric_kind=value` override string.
    ///
    /// # Errors
    /// Returns `InvalidOverride` for a malformed string, `UnknownMetric` for
    /// an unrecognized metric name, and range errors from `set_threshold`.
    pub fn parse_threshold(&mut self, input: &str) -> Result<()> {
        let Some((name, value)) = input.split_once('=') else {
            return Err(MetricGuardError::InvalidOverride(format!(
                "expected 'metric_kind=value', got '{input}'"
            )));
        };

        let name = name.trim();
        let metric = MetricKind::parse(name)
            .ok_or_else(|| MetricGuardError::UnknownMetric(name.to_string()))?;

        let value: f64 = value.trim().parse().map_err(|_| {
            MetricGuardError::InvalidOverride(format!(
                "threshold value must be a number, got '{}'",
                value.trim()
            ))
        })?;

        self.set_threshold(metric, value)
    }

    #[must_use]
    pub fn has_overrides(&self) -> bool {
        !self.include_patterns.is_empty()
            || !self.exclude_patterns.is_empty()
            || !self.threshold_overrides.is_empty()
            || self.disable_gitignore
            || self.force_analyze
    }

    /// Merge the overrides into `config`, returning a new effective config.
    ///
    /// Threshold overrides replace the matching default field and every
    /// matching language-scoped rule; they never add a metric kind that was
    /// not already configured.
    #[must_use]
    pub fn apply(&self, config: &Config) -> Config {
        let mut merged = config.clone();

        if self.disable_gitignore {
            merged.use_gitignore = false;
        }

        for pattern in &self.exclude_patterns {
            if !merged.ignore_patterns.iter().any(|p| p == pattern) {
                merged.ignore_patterns.push(pattern.clone());
            }
        }

        for (&metric, &value) in &self.threshold_overrides {
            merged.defaults.set(metric, value);
            for language in &mut merged.languages {
                for rule in &mut language.rules {
                    if rule.metric == metric {
                        rule.threshold = value;
                    }
                }
            }
        }

        merged
    }
}

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;
