mod heuristic;
mod parser;
mod types;

use std::collections::HashMap;
use std::path::Path;

pub use heuristic::HeuristicAnalyzer;
pub use parser::{FunctionParser, JsParser, PythonParser, parser_for};
pub use types::{FunctionInfo, Measurement};

use crate::error::Result;
use crate::language::Language;

/// Contract every language-specific analyzer must satisfy.
///
/// An analyzer must be deterministic for the same file content and must not
/// mutate shared state. A failure to analyze one file is reported through
/// the `Result`; it never aborts the surrounding run.
pub trait Analyzer {
    /// Measure one file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed; the caller
    /// records it on the file's report and continues.
    fn analyze(&self, path: &Path) -> Result<Vec<Measurement>>;

    /// Whether the analyzer's backing tooling is usable at runtime.
    ///
    /// Files of a language whose analyzer is unavailable are silently
    /// skipped, not errored.
    fn is_available(&self) -> bool {
        true
    }
}

/// Runtime lookup table from language to analyzer.
pub struct AnalyzerRegistry {
    analyzers: HashMap<Language, Box<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzers: HashMap::new(),
        }
    }

    /// Registry with the heuristic analyzer for every known language.
    #[must_use]
    pub fn with_default_analyzers() -> Self {
        let mut registry = Self::new();
        for language in Language::KNOWN {
            registry.register(language, Box::new(HeuristicAnalyzer::new(language)));
        }
        registry
    }

    pub fn register(&mut self, language: Language, analyzer: Box<dyn Analyzer>) {
        self.analyzers.insert(language, analyzer);
    }

    /// Look up a usable analyzer for a language.
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&dyn Analyzer> {
        self.analyzers
            .get(&language)
            .map(Box::as_ref)
            .filter(|analyzer| analyzer.is_available())
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::with_default_analyzers()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
