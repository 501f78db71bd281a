use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::checker::FileReport;

use super::{GroupStats, compute_group_stats};

/// Group key for files with no ancestor package marker.
pub const NO_MODULE: &str = "<root>";

/// Marker file that makes a directory a package.
const PACKAGE_MARKER: &str = "__init__.py";

/// Roll file reports up into per-module statistics.
///
/// Module grouping is flat: each file is assigned the dotted name of its
/// package chain and groups are aggregated directly, with no tree
/// propagation.
#[must_use]
pub fn rollup_by_module(reports: &[FileReport]) -> IndexMap<String, GroupStats> {
    let mut groups: BTreeMap<String, Vec<&FileReport>> = BTreeMap::new();

    for report in reports {
        groups
            .entry(module_name(&report.path))
            .or_default()
            .push(report);
    }

    groups
        .into_iter()
        .map(|(name, files)| (name, compute_group_stats(&files)))
        .collect()
}

/// Dotted package name from walking parent directories upward while the
/// package marker is present; stops at the first ancestor lacking it.
fn module_name(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = path.parent();

    while let Some(dir) = current {
        if dir.as_os_str().is_empty() || !dir.join(PACKAGE_MARKER).exists() {
            break;
        }
        if let Some(name) = dir.file_name() {
            parts.insert(0, name.to_string_lossy().into_owned());
        }
        current = dir.parent();
    }

    if parts.is_empty() {
        NO_MODULE.to_string()
    } else {
        parts.join(".")
    }
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
