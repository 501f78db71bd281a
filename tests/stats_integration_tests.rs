#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::TestFixture;

fn cmd() -> Command {
    Command::cargo_bin("metric-guard").expect("binary should exist")
}

fn nested_fixture() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.create_cyclomatic_config(10);
    fixture.create_python_file("a/x.py", 2);
    fixture.create_python_file("a/b/y.py", 11);
    fixture
}

#[test]
fn default_depth_shows_top_level_directories_only() {
    let fixture = nested_fixture();

    cmd()
        .arg("stats")
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics by directory:"))
        .stdout(predicate::str::contains("a\n  files: 2"))
        .stdout(predicate::str::contains("a/b").not());
}

#[test]
fn unlimited_depth_shows_nested_directories() {
    let fixture = nested_fixture();

    cmd()
        .arg("stats")
        .arg("--depth")
        .arg("0")
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a\n  files: 2"))
        .stdout(predicate::str::contains("a/b\n  files: 1"));
}

#[test]
fn stats_exit_zero_even_with_violations() {
    let fixture = TestFixture::new();
    fixture.create_cyclomatic_config(10);
    fixture.create_python_file("busy.py", 11);

    cmd()
        .arg("stats")
        .current_dir(fixture.path())
        .assert()
        .success();
}

#[test]
fn by_module_groups_by_package_chain() {
    let fixture = TestFixture::new();
    fixture.create_cyclomatic_config(10);
    fixture.mark_package("pkg");
    fixture.mark_package("pkg/sub");
    fixture.create_python_file("pkg/sub/mod.py", 1);
    fixture.create_python_file("standalone.py", 1);

    cmd()
        .arg("stats")
        .arg("--by-module")
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics by module:"))
        .stdout(predicate::str::contains("pkg.sub"))
        .stdout(predicate::str::contains("<root>"));
}

#[test]
fn metric_filter_limits_displayed_averages() {
    let fixture = nested_fixture();

    cmd()
        .arg("stats")
        .arg("--metric")
        .arg("lines_of_code")
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("avg lines_of_code"))
        .stdout(predicate::str::contains("avg halstead_volume").not());
}

#[test]
fn unknown_metric_name_is_an_input_error() {
    let fixture = nested_fixture();

    cmd()
        .arg("stats")
        .arg("--metric")
        .arg("sparkle_factor")
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown metric"));
}

#[test]
fn json_stats_serialize_group_map() {
    let fixture = nested_fixture();

    cmd()
        .arg("stats")
        .arg("--format")
        .arg("json")
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"file_count\": 2"))
        .stdout(predicate::str::contains("\"averages\""));
}

#[test]
fn csv_stats_have_group_rows() {
    let fixture = nested_fixture();

    cmd()
        .arg("stats")
        .arg("--format")
        .arg("csv")
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("group,file_count,function_count"))
        .stdout(predicate::str::contains("a,2,"));
}

#[test]
fn stats_on_empty_directory_is_an_input_error() {
    let fixture = TestFixture::new();

    cmd()
        .arg("stats")
        .arg("--no-config")
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No files found"));
}
