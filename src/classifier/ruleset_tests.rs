use std::path::PathBuf;

use super::*;

fn ruleset(ignore: &[&str], include: &[&str], force_analyze: bool) -> ClassificationRuleSet {
    let ignore: Vec<String> = ignore.iter().map(ToString::to_string).collect();
    let include: Vec<String> = include.iter().map(ToString::to_string).collect();
    ClassificationRuleSet::new(Path::new("."), &ignore, &include, force_analyze).unwrap()
}

#[test]
fn classify_returns_extension_language_without_rules() {
    let rules = ruleset(&[], &[], false);

    assert_eq!(rules.classify(Path::new("src/app.py")), Some(Language::Python));
    assert_eq!(rules.classify(Path::new("web/app.ts")), Some(Language::TypeScript));
    assert_eq!(rules.classify(Path::new("Makefile")), Some(Language::Unknown));
}

#[test]
fn ignore_pattern_excludes_file() {
    let rules = ruleset(&["**/tests/**"], &[], false);

    assert_eq!(rules.classify(Path::new("pkg/tests/test_app.py")), None);
    assert_eq!(rules.classify(Path::new("pkg/app.py")), Some(Language::Python));
}

#[test]
fn later_negation_reincludes_file() {
    let rules = ruleset(&["generated/*", "!generated/keep.py"], &[], false);

    assert_eq!(rules.classify(Path::new("generated/skip.py")), None);
    assert_eq!(
        rules.classify(Path::new("generated/keep.py")),
        Some(Language::Python)
    );
}

#[test]
fn directory_pattern_covers_contained_files() {
    let rules = ruleset(&["build/"], &[], false);

    assert_eq!(rules.classify(Path::new("build/gen.py")), None);
    assert_eq!(rules.classify(Path::new("build/deep/gen.py")), None);
    assert_eq!(rules.classify(Path::new("src/build.py")), Some(Language::Python));
}

#[test]
fn double_star_matches_any_depth() {
    let rules = ruleset(&["**/vendor/**"], &[], false);

    assert_eq!(rules.classify(Path::new("a/b/c/vendor/d/lib.js")), None);
}

#[test]
fn force_include_wins_over_ignore() {
    let rules = ruleset(&["**/legacy/**"], &["**/legacy/core.py"], false);

    assert_eq!(rules.classify(Path::new("src/legacy/util.py")), None);
    assert_eq!(
        rules.classify(Path::new("src/legacy/core.py")),
        Some(Language::Python)
    );
}

#[test]
fn force_analyze_overrides_everything() {
    // Both an ignore and an include pattern match; force_analyze must win
    // before either is consulted.
    let rules = ruleset(&["**/*.py"], &["src/keep.py"], true);

    assert_eq!(rules.classify(Path::new("src/keep.py")), Some(Language::Python));
    assert_eq!(rules.classify(Path::new("src/other.py")), Some(Language::Python));

    // And with no patterns at all.
    let bare = ruleset(&[], &[], true);
    assert_eq!(bare.classify(Path::new("x.py")), Some(Language::Python));
}

#[test]
fn path_outside_base_matches_filename_only() {
    let ignore: Vec<String> = vec!["tmp/*.py".to_string(), "stray.py".to_string()];
    let rules =
        ClassificationRuleSet::new(Path::new("/work/project"), &ignore, &[], false).unwrap();

    // Outside the base directory only the filename is matched, so the
    // directory-qualified pattern cannot fire.
    assert_eq!(
        rules.classify(Path::new("/elsewhere/tmp/module.py")),
        Some(Language::Python)
    );
    assert_eq!(rules.classify(Path::new("/elsewhere/stray.py")), None);
}

#[test]
fn invalid_pattern_is_reported() {
    let patterns = vec!["a[".to_string()];
    let result = ClassificationRuleSet::new(Path::new("."), &patterns, &[], false);

    assert!(result.is_err());
}

#[test]
fn group_by_language_partitions_and_drops() {
    let rules = ruleset(&["skip/**"], &[], false);
    let paths: Vec<PathBuf> = [
        "a/x.py",
        "a/y.py",
        "web/app.js",
        "web/app.ts",
        "skip/z.py",
        "README.md",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    let groups = rules.group_by_language(&paths);

    assert_eq!(groups[&Language::Python].len(), 2);
    assert_eq!(groups[&Language::JavaScript].len(), 1);
    assert_eq!(groups[&Language::TypeScript].len(), 1);
    assert!(!groups.contains_key(&Language::Unknown));
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, 4);
}
