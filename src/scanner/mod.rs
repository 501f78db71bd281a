use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use walkdir::WalkDir;

use crate::error::{MetricGuardError, Result};

/// Expand CLI paths and glob patterns into a sorted, de-duplicated file list.
///
/// Directories are walked recursively (respecting `.gitignore` when
/// `use_gitignore` is set); glob patterns are matched relative to
/// `base_dir`. The scanner performs no language filtering: classification
/// belongs to the rule set, not the walk.
///
/// # Errors
/// Returns a `Config` error for an explicitly named path that does not
/// exist, or `InvalidGlob` for a malformed pattern.
pub fn collect_files(
    paths: &[PathBuf],
    patterns: &[String],
    base_dir: &Path,
    use_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut collected: BTreeSet<PathBuf> = BTreeSet::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    let mut insert = |path: PathBuf| {
        // Canonical identity keeps `./a.py` and `a.py` from both surviving.
        let identity = dunce::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if seen.insert(identity) {
            collected.insert(path);
        }
    };

    for path in paths {
        if path.is_file() {
            insert(path.clone());
        } else if path.is_dir() {
            for file in walk_directory(path, use_gitignore) {
                insert(file);
            }
        } else {
            return Err(MetricGuardError::Config(format!(
                "Path does not exist: {}",
                path.display()
            )));
        }
    }

    if !patterns.is_empty() {
        let matcher = build_glob_set(patterns)?;
        for file in walk_directory(base_dir, use_gitignore) {
            let candidate = file.strip_prefix(base_dir).unwrap_or(&file);
            if matcher.is_match(candidate) {
                insert(file.clone());
            }
        }
    }

    Ok(collected.into_iter().collect())
}

fn walk_directory(root: &Path, use_gitignore: bool) -> Vec<PathBuf> {
    if use_gitignore {
        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .collect()
    } else {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| MetricGuardError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }

    builder.build().map_err(|source| MetricGuardError::InvalidGlob {
        pattern: "combined patterns".to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
