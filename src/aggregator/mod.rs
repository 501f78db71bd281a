use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyzer::{Analyzer, AnalyzerRegistry};
use crate::checker::{FileReport, check_measurement};
use crate::classifier::ClassificationRuleSet;
use crate::config::{Config, MetricKind, ThresholdRule};
use crate::language::Language;

/// Orchestrates classification, measurement, and violation checking.
///
/// `analyze_files` is a pure function of its inputs plus the current
/// filesystem state: no shared mutable state, no internal parallelism, and
/// output order follows a stable sort of the input paths so repeated runs on
/// the same file set are byte-identical.
pub struct MetricAggregator {
    config: Config,
    ruleset: ClassificationRuleSet,
    analyzers: AnalyzerRegistry,
}

impl MetricAggregator {
    #[must_use]
    pub fn new(config: Config, ruleset: ClassificationRuleSet) -> Self {
        Self::with_registry(config, ruleset, AnalyzerRegistry::with_default_analyzers())
    }

    #[must_use]
    pub const fn with_registry(
        config: Config,
        ruleset: ClassificationRuleSet,
        analyzers: AnalyzerRegistry,
    ) -> Self {
        Self {
            config,
            ruleset,
            analyzers,
        }
    }

    /// Analyze a set of files into per-file reports.
    ///
    /// Ignored and unknown files never reach an analyzer; files of a
    /// language without a usable analyzer are silently excluded. A single
    /// file's analyzer failure is recorded on that file's report and never
    /// aborts the batch.
    #[must_use]
    pub fn analyze_files(&self, paths: &[PathBuf]) -> Vec<FileReport> {
        self.analyze_files_observed(paths, &mut |_| {})
    }

    /// `analyze_files` with a per-file observer, used by the CLI to drive
    /// its progress bar.
    #[must_use]
    pub fn analyze_files_observed(
        &self,
        paths: &[PathBuf],
        observe: &mut dyn FnMut(&Path),
    ) -> Vec<FileReport> {
        let mut sorted = paths.to_vec();
        sorted.sort();

        let groups = self.ruleset.group_by_language(&sorted);
        let mut reports = Vec::new();

        for (language, files) in groups {
            let Some(analyzer) = self.analyzers.get(language) else {
                continue;
            };
            let rules = self.config.effective_rules_for(language);

            for file in files {
                observe(&file);
                reports.push(analyze_file(&file, language, analyzer, &rules));
            }
        }

        reports.sort_by(|a, b| a.path.cmp(&b.path));
        reports
    }
}

/// Measure one file and check every measurement against the matching rules.
///
/// This is the run's only recovery boundary: an analyzer error becomes the
/// report's `error` field.
fn analyze_file(
    path: &Path,
    language: Language,
    analyzer: &dyn Analyzer,
    rules: &[ThresholdRule],
) -> FileReport {
    match analyzer.analyze(path) {
        Ok(measurements) => {
            let violations = measurements
                .iter()
                .flat_map(|measurement| {
                    rules
                        .iter()
                        .filter(|rule| rule.metric == measurement.metric)
                        .filter_map(|rule| check_measurement(path, measurement, rule))
                })
                .collect();

            FileReport {
                path: path.to_path_buf(),
                language,
                measurements,
                violations,
                error: None,
            }
        }
        Err(error) => FileReport {
            path: path.to_path_buf(),
            language,
            measurements: Vec::new(),
            violations: Vec::new(),
            error: Some(error.to_string()),
        },
    }
}

/// Flat aggregate over a report list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_files: usize,
    pub files_with_violations: usize,
    pub total_violations: usize,
    pub violations_by_kind: IndexMap<MetricKind, usize>,
    pub files_by_language: IndexMap<Language, usize>,
    pub success: bool,
}

/// Pure fold over the reports; no side effects.
#[must_use]
pub fn generate_summary(reports: &[FileReport]) -> Summary {
    let total_files = reports.len();
    let files_with_violations = reports.iter().filter(|r| r.has_violations()).count();
    let total_violations: usize = reports.iter().map(FileReport::violation_count).sum();

    let mut violations_by_kind: IndexMap<MetricKind, usize> = IndexMap::new();
    let mut files_by_language: IndexMap<Language, usize> = IndexMap::new();

    for report in reports {
        for violation in &report.violations {
            *violations_by_kind.entry(violation.metric).or_insert(0) += 1;
        }
        *files_by_language.entry(report.language).or_insert(0) += 1;
    }

    Summary {
        total_files,
        files_with_violations,
        total_violations,
        violations_by_kind,
        files_by_language,
        success: total_violations == 0,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
