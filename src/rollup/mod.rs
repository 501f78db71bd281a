mod directory;
mod module;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

pub use directory::{MAX_DEPTH, rollup_by_directory};
pub use module::{NO_MODULE, rollup_by_module};

use crate::checker::FileReport;
use crate::config::MetricKind;

/// Aggregate statistics for one directory or module group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub file_count: usize,
    pub function_count: usize,
    /// Per-metric mean over every measurement in the group.
    pub averages: IndexMap<MetricKind, f64>,
}

/// Compute group statistics over a set of file reports.
///
/// De-duplication keys on file identity (the path), not value equality: a
/// report reaching the group through more than one propagation path means
/// the tree was built incorrectly, and this guard keeps the counts and
/// averages honest anyway.
fn compute_group_stats(files: &[&FileReport]) -> GroupStats {
    let mut seen: HashSet<&Path> = HashSet::new();
    let unique: Vec<&FileReport> = files
        .iter()
        .copied()
        .filter(|report| seen.insert(report.path.as_path()))
        .collect();

    let mut function_names: BTreeSet<&str> = BTreeSet::new();
    let mut values: BTreeMap<MetricKind, Vec<f64>> = BTreeMap::new();

    for report in &unique {
        for measurement in &report.measurements {
            if let Some(name) = &measurement.function {
                function_names.insert(name);
            }
            values
                .entry(measurement.metric)
                .or_default()
                .push(measurement.value);
        }
    }

    let averages = values
        .into_iter()
        .map(|(metric, values)| (metric, mean(&values)))
        .collect();

    GroupStats {
        file_count: unique.len(),
        function_count: function_names.len(),
        averages,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    values.iter().sum::<f64>() / count
}
