use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A measurable property of code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    CyclomaticComplexity,
    CognitiveComplexity,
    MaintainabilityIndex,
    HalsteadVolume,
    HalsteadDifficulty,
    HalsteadEffort,
    LinesOfCode,
}

impl MetricKind {
    pub const ALL: [Self; 7] = [
        Self::CyclomaticComplexity,
        Self::CognitiveComplexity,
        Self::MaintainabilityIndex,
        Self::HalsteadVolume,
        Self::HalsteadDifficulty,
        Self::HalsteadEffort,
        Self::LinesOfCode,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CyclomaticComplexity => "cyclomatic_complexity",
            Self::CognitiveComplexity => "cognitive_complexity",
            Self::MaintainabilityIndex => "maintainability_index",
            Self::HalsteadVolume => "halstead_volume",
            Self::HalsteadDifficulty => "halstead_difficulty",
            Self::HalsteadEffort => "halstead_effort",
            Self::LinesOfCode => "lines_of_code",
        }
    }

    /// Title-cased name for human-readable messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CyclomaticComplexity => "Cyclomatic Complexity",
            Self::CognitiveComplexity => "Cognitive Complexity",
            Self::MaintainabilityIndex => "Maintainability Index",
            Self::HalsteadVolume => "Halstead Volume",
            Self::HalsteadDifficulty => "Halstead Difficulty",
            Self::HalsteadEffort => "Halstead Effort",
            Self::LinesOfCode => "Lines Of Code",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison direction for a threshold rule.
///
/// The threshold is the allowed boundary: a `<=` rule flags only values
/// strictly greater than the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "<")]
    Lt,
    #[default]
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
}

impl ComparisonOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single metric threshold rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub metric: MetricKind,
    pub threshold: f64,

    #[serde(default)]
    pub comparison: ComparisonOperator,

    /// Disabled rules are kept for display but never produce violations.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl ThresholdRule {
    #[must_use]
    pub const fn new(metric: MetricKind, threshold: f64, comparison: ComparisonOperator) -> Self {
        Self {
            metric,
            threshold,
            comparison,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Default threshold values, applied to any language without its own rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_max_cyclomatic")]
    pub max_cyclomatic_complexity: f64,

    #[serde(default = "default_max_cognitive")]
    pub max_cognitive_complexity: f64,

    #[serde(default = "default_min_maintainability")]
    pub min_maintainability_index: f64,

    #[serde(default = "default_max_volume")]
    pub max_halstead_volume: f64,

    #[serde(default = "default_max_difficulty")]
    pub max_halstead_difficulty: f64,

    #[serde(default = "default_max_effort")]
    pub max_halstead_effort: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_cyclomatic_complexity: default_max_cyclomatic(),
            max_cognitive_complexity: default_max_cognitive(),
            min_maintainability_index: default_min_maintainability(),
            max_halstead_volume: default_max_volume(),
            max_halstead_difficulty: default_max_difficulty(),
            max_halstead_effort: default_max_effort(),
        }
    }
}

impl DefaultsConfig {
    /// Synthesize a rule list from the default fields.
    ///
    /// The comparison direction follows the field name prefix: `max_` fields
    /// become `<=` rules, `min_` fields become `>=` rules. Cognitive
    /// complexity is synthesized disabled: the heuristic analyzer cannot
    /// measure it.
    #[must_use]
    pub fn to_rules(&self) -> Vec<ThresholdRule> {
        vec![
            ThresholdRule::new(
                MetricKind::CyclomaticComplexity,
                self.max_cyclomatic_complexity,
                ComparisonOperator::Le,
            ),
            ThresholdRule::new(
                MetricKind::MaintainabilityIndex,
                self.min_maintainability_index,
                ComparisonOperator::Ge,
            ),
            ThresholdRule::new(
                MetricKind::HalsteadVolume,
                self.max_halstead_volume,
                ComparisonOperator::Le,
            ),
            ThresholdRule::new(
                MetricKind::HalsteadDifficulty,
                self.max_halstead_difficulty,
                ComparisonOperator::Le,
            ),
            ThresholdRule::new(
                MetricKind::HalsteadEffort,
                self.max_halstead_effort,
                ComparisonOperator::Le,
            ),
            ThresholdRule::new(
                MetricKind::CognitiveComplexity,
                self.max_cognitive_complexity,
                ComparisonOperator::Le,
            )
            .disabled(),
        ]
    }

    /// Replace the default value backing `metric`, if one exists.
    ///
    /// Metric kinds without a default field (lines of code) are left alone:
    /// overrides never introduce new rules.
    pub const fn set(&mut self, metric: MetricKind, value: f64) {
        match metric {
            MetricKind::CyclomaticComplexity => self.max_cyclomatic_complexity = value,
            MetricKind::CognitiveComplexity => self.max_cognitive_complexity = value,
            MetricKind::MaintainabilityIndex => self.min_maintainability_index = value,
            MetricKind::HalsteadVolume => self.max_halstead_volume = value,
            MetricKind::HalsteadDifficulty => self.max_halstead_difficulty = value,
            MetricKind::HalsteadEffort => self.max_halstead_effort = value,
            MetricKind::LinesOfCode => {}
        }
    }
}

/// Threshold rules scoped to one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRules {
    pub name: Language,

    #[serde(default)]
    pub rules: Vec<ThresholdRule>,
}

/// Top-level configuration model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub languages: Vec<LanguageRules>,

    /// Gitignore-style patterns excluding files from analysis.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Merge patterns from `.gitignore` into the ignore list.
    #[serde(default = "default_true")]
    pub use_gitignore: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            languages: Vec::new(),
            ignore_patterns: Vec::new(),
            use_gitignore: true,
        }
    }
}

impl Config {
    /// Resolve the threshold rules in effect for a language.
    ///
    /// Returns the language-scoped list when configured, otherwise a list
    /// synthesized from the defaults.
    #[must_use]
    pub fn effective_rules_for(&self, language: Language) -> Vec<ThresholdRule> {
        self.languages
            .iter()
            .find(|lang| lang.name == language)
            .map_or_else(|| self.defaults.to_rules(), |lang| lang.rules.clone())
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_cyclomatic() -> f64 {
    10.0
}

const fn default_max_cognitive() -> f64 {
    15.0
}

const fn default_min_maintainability() -> f64 {
    50.0
}

const fn default_max_volume() -> f64 {
    1000.0
}

const fn default_max_difficulty() -> f64 {
    10.0
}

const fn default_max_effort() -> f64 {
    10000.0
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
