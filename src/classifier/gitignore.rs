use std::fs;
use std::path::Path;

use crate::error::{MetricGuardError, Result};

/// Read glob lines from a gitignore-style file.
///
/// Blank lines and `#` comments are skipped; remaining lines are returned
/// verbatim for merging into an ignore pattern list. A missing file yields
/// an empty list.
///
/// # Errors
/// Returns `FileRead` if the file exists but cannot be read.
pub fn read_gitignore_patterns(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| MetricGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

#[cfg(test)]
#[path = "gitignore_tests.rs"]
mod tests;
