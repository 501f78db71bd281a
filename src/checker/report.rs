use std::path::PathBuf;

use serde::Serialize;

use crate::analyzer::Measurement;
use crate::language::Language;

use super::Violation;

/// Analysis result for one file. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Language,
    pub measurements: Vec<Measurement>,
    pub violations: Vec<Violation>,

    /// Set when the analyzer failed on this file; measurements are then
    /// empty and the rest of the run is unaffected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}
