use std::path::PathBuf;

use super::*;
use crate::aggregator::generate_summary;
use crate::analyzer::Measurement;
use crate::config::MetricKind;
use crate::language::Language;

#[test]
fn json_output_is_parseable_and_complete() {
    let reports = vec![FileReport {
        path: PathBuf::from("a/x.py"),
        language: Language::Python,
        measurements: vec![Measurement::file_level(MetricKind::LinesOfCode, 10.0)],
        violations: Vec::new(),
        error: None,
    }];
    let summary = generate_summary(&reports);

    let output = JsonFormatter.format(&reports, &summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 1);
    assert_eq!(parsed["summary"]["success"], true);
    assert_eq!(parsed["files"][0]["path"], "a/x.py");
    assert_eq!(parsed["files"][0]["language"], "python");
    assert_eq!(
        parsed["files"][0]["measurements"][0]["metric"],
        "lines_of_code"
    );
}

#[test]
fn absent_optional_fields_are_omitted() {
    let reports = vec![FileReport {
        path: PathBuf::from("a/x.py"),
        language: Language::Python,
        measurements: vec![Measurement::file_level(MetricKind::LinesOfCode, 10.0)],
        violations: Vec::new(),
        error: None,
    }];
    let summary = generate_summary(&reports);

    let output = JsonFormatter.format(&reports, &summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(parsed["files"][0].get("error").is_none());
    assert!(parsed["files"][0]["measurements"][0].get("function").is_none());
}
