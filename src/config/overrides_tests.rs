use super::*;
use crate::config::{ComparisonOperator, LanguageRules, ThresholdRule};
use crate::language::Language;

#[test]
fn parse_threshold_accepts_valid_string() {
    let mut overrides = AnalysisOverride::default();
    overrides.parse_threshold("cyclomatic_complexity=15").unwrap();

    assert_eq!(
        overrides.threshold_overrides.get(&MetricKind::CyclomaticComplexity),
        Some(&15.0)
    );
}

#[test]
fn parse_threshold_trims_whitespace() {
    let mut overrides = AnalysisOverride::default();
    overrides.parse_threshold(" halstead_volume = 500 ").unwrap();

    assert_eq!(
        overrides.threshold_overrides.get(&MetricKind::HalsteadVolume),
        Some(&500.0)
    );
}

#[test]
fn parse_threshold_rejects_missing_equals() {
    let mut overrides = AnalysisOverride::default();
    let err = overrides.parse_threshold("cyclomatic_complexity").unwrap_err();

    assert!(matches!(err, MetricGuardError::InvalidOverride(_)));
}

#[test]
fn parse_threshold_rejects_unknown_metric() {
    let mut overrides = AnalysisOverride::default();
    let err = overrides.parse_threshold("bogus_metric=5").unwrap_err();

    assert!(matches!(err, MetricGuardError::UnknownMetric(_)));
}

#[test]
fn parse_threshold_rejects_non_numeric_value() {
    let mut overrides = AnalysisOverride::default();
    let err = overrides.parse_threshold("cyclomatic_complexity=ten").unwrap_err();

    assert!(matches!(err, MetricGuardError::InvalidOverride(_)));
}

#[test]
fn parse_threshold_rejects_out_of_range_value() {
    let mut overrides = AnalysisOverride::default();
    let err = overrides.parse_threshold("cyclomatic_complexity=99").unwrap_err();

    assert!(matches!(err, MetricGuardError::InvalidOverride(_)));
}

#[test]
fn patterns_are_deduplicated() {
    let mut overrides = AnalysisOverride::default();
    overrides.add_include_pattern("src/**");
    overrides.add_include_pattern("src/**");
    overrides.add_exclude_pattern("**/vendored/**");
    overrides.add_exclude_pattern("**/vendored/**");

    assert_eq!(overrides.include_patterns.len(), 1);
    assert_eq!(overrides.exclude_patterns.len(), 1);
}

#[test]
fn apply_replaces_default_and_language_thresholds() {
    let config = Config {
        languages: vec![LanguageRules {
            name: Language::Python,
            rules: vec![ThresholdRule::new(
                MetricKind::CyclomaticComplexity,
                10.0,
                ComparisonOperator::Le,
            )],
        }],
        ..Config::default()
    };

    let mut overrides = AnalysisOverride::default();
    overrides.set_threshold(MetricKind::CyclomaticComplexity, 20.0).unwrap();

    let merged = overrides.apply(&config);

    assert!((merged.defaults.max_cyclomatic_complexity - 20.0).abs() < f64::EPSILON);
    assert!((merged.languages[0].rules[0].threshold - 20.0).abs() < f64::EPSILON);
    // Source config untouched.
    assert!((config.defaults.max_cyclomatic_complexity - 10.0).abs() < f64::EPSILON);
}

#[test]
fn apply_never_adds_new_rules() {
    let config = Config {
        languages: vec![LanguageRules {
            name: Language::Python,
            rules: vec![ThresholdRule::new(
                MetricKind::HalsteadVolume,
                1000.0,
                ComparisonOperator::Le,
            )],
        }],
        ..Config::default()
    };

    let mut overrides = AnalysisOverride::default();
    overrides.set_threshold(MetricKind::LinesOfCode, 400.0).unwrap();

    let merged = overrides.apply(&config);

    assert_eq!(merged.languages[0].rules.len(), 1);
    assert_eq!(merged.languages[0].rules[0].metric, MetricKind::HalsteadVolume);
}

#[test]
fn apply_merges_exclude_patterns_and_gitignore_flag() {
    let config = Config {
        ignore_patterns: vec!["**/tests/**".to_string()],
        ..Config::default()
    };

    let mut overrides = AnalysisOverride {
        disable_gitignore: true,
        ..AnalysisOverride::default()
    };
    overrides.add_exclude_pattern("**/build/**");
    overrides.add_exclude_pattern("**/tests/**");

    let merged = overrides.apply(&config);

    assert!(!merged.use_gitignore);
    assert_eq!(
        merged.ignore_patterns,
        vec!["**/tests/**".to_string(), "**/build/**".to_string()]
    );
}

#[test]
fn has_overrides_reflects_state() {
    let mut overrides = AnalysisOverride::default();
    assert!(!overrides.has_overrides());

    overrides.force_analyze = true;
    assert!(overrides.has_overrides());
}
