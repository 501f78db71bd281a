use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::MetricKind;
use crate::error::{MetricGuardError, Result};
use crate::language::Language;

use super::parser::{FunctionParser, parser_for};
use super::types::Measurement;
use super::Analyzer;

/// Keywords counted as decision points for the cyclomatic approximation.
const DECISION_KEYWORDS: [&str; 11] = [
    "if", "for", "while", "switch", "case", "catch", "&&", "||", "?", "elif", "except",
];

/// Reference analyzer computing heuristic approximations.
///
/// This is the fallback for languages without a dedicated analyzer: token
/// counts and decision keywords stand in for a real parse. The numbers are
/// coarse, but they degrade gracefully instead of failing the run.
pub struct HeuristicAnalyzer {
    string_literal: Regex,
    token_split: Regex,
    parser: Option<Box<dyn FunctionParser>>,
}

impl HeuristicAnalyzer {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            string_literal: Regex::new(r#""[^"\n]*"|'[^'\n]*'"#).expect("Invalid regex"),
            token_split: Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid regex"),
            parser: parser_for(language),
        }
    }

    /// Measure source text directly.
    #[must_use]
    pub fn measure(&self, source: &str) -> Vec<Measurement> {
        let code_lines: Vec<&str> = source
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with("//")
            })
            .collect();
        let loc = code_lines.len();

        let file_cyclomatic = self.cyclomatic(&code_lines);
        let (volume, difficulty) = self.halstead(source);
        let effort = volume * difficulty;
        let maintainability = maintainability_index(volume, file_cyclomatic, loc);

        let mut measurements = Vec::new();

        // Per-function cyclomatic complexity where functions are detectable;
        // a single file-level value for module-level scripts.
        let functions = self
            .parser
            .as_ref()
            .map(|parser| parser.parse(source))
            .unwrap_or_default();

        if functions.is_empty() {
            measurements.push(Measurement::file_level(
                MetricKind::CyclomaticComplexity,
                file_cyclomatic,
            ));
        } else {
            let all_lines: Vec<&str> = source.lines().collect();
            for function in &functions {
                let body: Vec<&str> = all_lines
                    [function.start_line - 1..function.end_line.min(all_lines.len())]
                    .iter()
                    .copied()
                    .filter(|line| {
                        let trimmed = line.trim();
                        !trimmed.is_empty() && !trimmed.starts_with("//")
                    })
                    .collect();

                measurements.push(Measurement::function_level(
                    MetricKind::CyclomaticComplexity,
                    self.cyclomatic(&body),
                    function.start_line,
                    function.name.clone(),
                ));
            }
        }

        measurements.push(Measurement::file_level(MetricKind::HalsteadVolume, volume));
        measurements.push(Measurement::file_level(
            MetricKind::HalsteadDifficulty,
            difficulty,
        ));
        measurements.push(Measurement::file_level(MetricKind::HalsteadEffort, effort));
        measurements.push(Measurement::file_level(
            MetricKind::MaintainabilityIndex,
            maintainability,
        ));

        #[allow(clippy::cast_precision_loss)]
        measurements.push(Measurement::file_level(MetricKind::LinesOfCode, loc as f64));

        measurements
    }

    /// 1 + decision-point count, with string literals stripped per line so
    /// keywords inside strings are not counted.
    fn cyclomatic(&self, lines: &[&str]) -> f64 {
        let mut count: usize = 0;
        for line in lines {
            let stripped = self.string_literal.replace_all(line, "");
            for keyword in DECISION_KEYWORDS {
                count += stripped.matches(keyword).count();
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let decisions = count as f64;
        1.0 + decisions
    }

    /// Token-based Halstead volume and difficulty.
    fn halstead(&self, source: &str) -> (f64, f64) {
        let tokens: Vec<&str> = self
            .token_split
            .split(source)
            .filter(|token| !token.is_empty())
            .collect();
        let unique: HashSet<&&str> = tokens.iter().collect();

        if unique.is_empty() {
            return (0.0, 0.0);
        }

        #[allow(clippy::cast_precision_loss)]
        let total = tokens.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let distinct = unique.len() as f64;

        let volume = total * distinct.log2();
        let difficulty = (distinct / 2.0) * (total / distinct);
        (volume, difficulty)
    }
}

/// Maintainability index estimate, rescaled to 0-100.
fn maintainability_index(volume: f64, cyclomatic: f64, loc: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let loc = loc.max(1) as f64;
    let raw = 171.0 - 5.2 * volume.max(1e-8).ln() - 0.23 * cyclomatic - 16.2 * loc.ln();
    (100.0 * raw / 171.0).max(0.0)
}

impl Analyzer for HeuristicAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Vec<Measurement>> {
        let source = fs::read_to_string(path).map_err(|source| MetricGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.measure(&source))
    }
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod tests;
