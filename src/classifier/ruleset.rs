use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use indexmap::IndexMap;

use crate::error::{MetricGuardError, Result};
use crate::language::Language;

/// Compiled pattern rules deciding which files are analyzable.
///
/// Precedence, highest first: `force_analyze` (everything is included),
/// force-include patterns, ignore patterns, extension-derived language.
/// All patterns use gitignore semantics, so `**` matches any depth and a
/// later `!pattern` can re-include what an earlier pattern excluded.
pub struct ClassificationRuleSet {
    base_dir: PathBuf,
    ignore: Gitignore,
    include: Gitignore,
    force_analyze: bool,
}

impl ClassificationRuleSet {
    /// Compile a rule set rooted at `base_dir`.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if a pattern fails to compile.
    pub fn new(
        base_dir: &Path,
        ignore_patterns: &[String],
        include_patterns: &[String],
        force_analyze: bool,
    ) -> Result<Self> {
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            ignore: build_matcher(base_dir, ignore_patterns)?,
            include: build_matcher(base_dir, include_patterns)?,
            force_analyze,
        })
    }

    /// Classify a path, returning `None` when it is ignored.
    ///
    /// `Some(Language::Unknown)` means the file is not excluded but has no
    /// recognized extension; callers normally drop those too.
    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<Language> {
        if self.force_analyze {
            return Some(Language::from_path(path));
        }

        let candidate = self.match_candidate(path);

        // Force-include wins over ignore.
        if pattern_matches(&self.include, candidate) {
            return Some(Language::from_path(path));
        }

        if pattern_matches(&self.ignore, candidate) {
            return None;
        }

        Some(Language::from_path(path))
    }

    /// Partition paths by language, dropping ignored and unknown files.
    #[must_use]
    pub fn group_by_language(&self, paths: &[PathBuf]) -> IndexMap<Language, Vec<PathBuf>> {
        let mut groups: IndexMap<Language, Vec<PathBuf>> = IndexMap::new();

        for path in paths {
            match self.classify(path) {
                Some(Language::Unknown) | None => {}
                Some(language) => groups.entry(language).or_default().push(path.clone()),
            }
        }

        groups
    }

    /// The path actually tested against the patterns.
    ///
    /// Matching is relative to the base directory. A path outside the base
    /// falls back to its filename only, so absolute-path patterns cannot
    /// accidentally match unrelated trees.
    fn match_candidate<'a>(&self, path: &'a Path) -> &'a Path {
        if let Ok(rel) = path.strip_prefix(&self.base_dir) {
            rel
        } else if path.is_relative() {
            path
        } else {
            path.file_name().map_or(path, Path::new)
        }
    }
}

fn build_matcher(base_dir: &Path, patterns: &[String]) -> Result<Gitignore> {
    let mut builder = GitignoreBuilder::new(base_dir);

    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|source| MetricGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
    }

    builder.build().map_err(|source| MetricGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source,
    })
}

/// A non-negated pattern match. Negated (`!`) patterns produce whitelist
/// matches, which count as "not matched" here. Parent directories are
/// consulted so directory patterns like `build/` cover the files beneath
/// them.
fn pattern_matches(matcher: &Gitignore, path: &Path) -> bool {
    matcher.matched_path_or_any_parents(path, false).is_ignore()
}

#[cfg(test)]
#[path = "ruleset_tests.rs"]
mod tests;
