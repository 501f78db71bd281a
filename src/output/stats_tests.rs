use indexmap::IndexMap;

use super::*;

fn sample_stats() -> IndexMap<String, GroupStats> {
    let mut averages = IndexMap::new();
    averages.insert(MetricKind::CyclomaticComplexity, 7.5);
    averages.insert(MetricKind::LinesOfCode, 40.0);

    let mut stats = IndexMap::new();
    stats.insert(
        "a".to_string(),
        GroupStats {
            file_count: 2,
            function_count: 3,
            averages,
        },
    );
    stats.insert(
        "d".to_string(),
        GroupStats {
            file_count: 1,
            function_count: 0,
            averages: IndexMap::new(),
        },
    );
    stats
}

#[test]
fn text_lists_groups_with_counts_and_averages() {
    let output = StatsTextFormatter::new("directory")
        .format(&sample_stats())
        .unwrap();

    assert!(output.contains("Statistics by directory:"));
    assert!(output.contains("a\n  files: 2\n  functions: 3"));
    assert!(output.contains("avg cyclomatic_complexity: 7.50"));
    assert!(output.contains("avg lines_of_code: 40.00"));
    assert!(output.contains("d\n  files: 1\n  functions: 0"));
}

#[test]
fn text_metric_filter_limits_averages() {
    let output = StatsTextFormatter::new("directory")
        .with_metrics(vec![MetricKind::LinesOfCode])
        .format(&sample_stats())
        .unwrap();

    assert!(output.contains("avg lines_of_code: 40.00"));
    assert!(!output.contains("avg cyclomatic_complexity"));
}

#[test]
fn empty_stats_say_so() {
    let output = StatsTextFormatter::new("module")
        .format(&IndexMap::new())
        .unwrap();

    assert!(output.contains("(no groups)"));
}

#[test]
fn json_round_trips() {
    let output = StatsJsonFormatter.format(&sample_stats()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["a"]["file_count"], 2);
    assert_eq!(parsed["a"]["averages"]["cyclomatic_complexity"], 7.5);
    assert_eq!(parsed["d"]["function_count"], 0);
}

#[test]
fn csv_has_union_of_metric_columns() {
    let output = StatsCsvFormatter.format(&sample_stats()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines[0],
        "group,file_count,function_count,avg_cyclomatic_complexity,avg_lines_of_code"
    );
    assert_eq!(lines[1], "a,2,3,7.50,40.00");
    // Groups missing a metric leave the column empty.
    assert_eq!(lines[2], "d,1,0,,");
}
