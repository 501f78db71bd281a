use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::checker::FileReport;

use super::{GroupStats, compute_group_stats};

/// Safety cap for "unlimited" depth requests.
pub const MAX_DEPTH: usize = 20;

/// Transient per-directory accumulator, keyed by normalized directory path.
///
/// The hierarchy is a plain path-prefix relation, so an explicit map plus an
/// upward walk replaces any recursive node structure.
#[derive(Default)]
struct DirectoryNode<'a> {
    /// Reports whose file lives directly in this directory.
    direct: Vec<&'a FileReport>,
    /// Reports inherited from all descendant directories.
    aggregated: Vec<&'a FileReport>,
}

/// Roll file reports up into per-directory statistics.
///
/// Builds one node per distinct parent directory, propagates direct files
/// upward from the deepest directories first, then keeps every directory
/// whose relative depth under `base_dir` is strictly less than `max_depth`
/// (0 meaning unlimited, capped at `MAX_DEPTH`). A top-level directory has
/// depth 0. The base directory itself appears, keyed `"."`, only when files
/// live directly in it. Result keys are `/`-separated paths relative to
/// `base_dir`, in path-sorted order.
#[must_use]
pub fn rollup_by_directory(
    reports: &[FileReport],
    base_dir: &Path,
    max_depth: usize,
) -> IndexMap<String, GroupStats> {
    if reports.is_empty() {
        return IndexMap::new();
    }

    let effective_depth = if max_depth == 0 { MAX_DEPTH } else { max_depth };

    let mut nodes = build_tree(reports);
    propagate_upward(&mut nodes);

    // Own direct files join the aggregated set at the end, not during
    // propagation, so the source level is never inserted twice.
    for node in nodes.values_mut() {
        let direct = node.direct.clone();
        node.aggregated.extend(direct);
    }

    let mut results = IndexMap::new();
    for (dir, node) in &nodes {
        if node.aggregated.is_empty() {
            continue;
        }

        let Some(rel) = relative_to_base(dir, base_dir) else {
            continue;
        };

        let components = rel.components().count();
        if components == 0 {
            // The base directory itself: only meaningful with direct files.
            if !node.direct.is_empty() {
                results.insert(".".to_string(), compute_group_stats(&node.aggregated));
            }
            continue;
        }

        let depth = components - 1;
        if depth >= effective_depth {
            continue;
        }

        results.insert(display_key(rel), compute_group_stats(&node.aggregated));
    }

    results
}

/// One node per distinct parent directory, holding its direct reports.
fn build_tree(reports: &[FileReport]) -> BTreeMap<PathBuf, DirectoryNode<'_>> {
    let mut nodes: BTreeMap<PathBuf, DirectoryNode<'_>> = BTreeMap::new();

    for report in reports {
        // "." and "" both mean "right here"; collapse them into one node.
        let parent = match report.path.parent() {
            None => PathBuf::new(),
            Some(p) if p == Path::new(".") => PathBuf::new(),
            Some(p) => p.to_path_buf(),
        };
        nodes.entry(parent).or_default().direct.push(report);
    }

    nodes
}

/// Walk each directory's ancestor chain, merging its direct reports into
/// every ancestor's aggregated set. Deepest directories go first.
fn propagate_upward(nodes: &mut BTreeMap<PathBuf, DirectoryNode<'_>>) {
    let mut dirs: Vec<PathBuf> = nodes.keys().cloned().collect();
    dirs.sort_by_key(|dir| std::cmp::Reverse(dir.components().count()));

    for dir in &dirs {
        let direct = nodes[dir].direct.clone();
        if direct.is_empty() {
            continue;
        }

        let mut current = dir.as_path();
        while let Some(parent) = current.parent() {
            nodes
                .entry(parent.to_path_buf())
                .or_default()
                .aggregated
                .extend(direct.iter().copied());
            current = parent;
        }
    }
}

/// Resolve `dir` relative to `base_dir`; `None` when it lies outside.
fn relative_to_base<'a>(dir: &'a Path, base_dir: &Path) -> Option<&'a Path> {
    if let Ok(rel) = dir.strip_prefix(base_dir) {
        return Some(rel);
    }

    // A "." or empty base pairs with relative report paths.
    let base_is_here = base_dir.as_os_str().is_empty() || base_dir == Path::new(".");
    if base_is_here && dir.is_relative() {
        return Some(dir);
    }

    None
}

fn display_key(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
