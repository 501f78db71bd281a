use std::fs;

use tempfile::TempDir;

use super::*;

fn setup_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/util")).unwrap();
    fs::write(temp.path().join("src/app.py"), "a = 1\n").unwrap();
    fs::write(temp.path().join("src/util/helpers.py"), "b = 2\n").unwrap();
    fs::write(temp.path().join("src/index.js"), "let c = 3;\n").unwrap();
    fs::write(temp.path().join("README.md"), "# readme\n").unwrap();
    temp
}

#[test]
fn directory_walk_collects_all_files() {
    let temp = setup_tree();

    let files = collect_files(&[temp.path().to_path_buf()], &[], temp.path(), false).unwrap();

    assert_eq!(files.len(), 4);
}

#[test]
fn explicit_file_paths_are_kept() {
    let temp = setup_tree();
    let app = temp.path().join("src/app.py");

    let files = collect_files(&[app.clone()], &[], temp.path(), false).unwrap();

    assert_eq!(files, vec![app]);
}

#[test]
fn missing_path_is_an_input_error() {
    let temp = setup_tree();

    let result = collect_files(
        &[temp.path().join("no_such_dir")],
        &[],
        temp.path(),
        false,
    );

    assert!(matches!(result, Err(MetricGuardError::Config(_))));
}

#[test]
fn patterns_match_relative_to_base() {
    let temp = setup_tree();

    let files = collect_files(
        &[],
        &["src/**/*.py".to_string()],
        temp.path(),
        false,
    )
    .unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() == "py"));
}

#[test]
fn invalid_pattern_is_rejected() {
    let temp = setup_tree();

    let result = collect_files(&[], &["src/[".to_string()], temp.path(), false);

    assert!(matches!(result, Err(MetricGuardError::InvalidGlob { .. })));
}

#[test]
fn duplicates_are_collapsed() {
    let temp = setup_tree();
    let app = temp.path().join("src/app.py");

    let files = collect_files(
        &[app.clone(), app.clone(), temp.path().join("src")],
        &[],
        temp.path(),
        false,
    )
    .unwrap();

    let app_count = files.iter().filter(|f| f.ends_with("app.py")).count();
    assert_eq!(app_count, 1);
}

#[test]
fn result_is_sorted() {
    let temp = setup_tree();

    let files = collect_files(&[temp.path().to_path_buf()], &[], temp.path(), false).unwrap();

    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn gitignore_walk_respects_ignore_file() {
    let temp = setup_tree();
    fs::write(temp.path().join(".gitignore"), "src/util/\n").unwrap();

    let files = collect_files(&[temp.path().to_path_buf()], &[], temp.path(), true).unwrap();

    assert!(files.iter().all(|f| !f.ends_with("helpers.py")));
}
