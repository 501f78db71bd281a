use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use metric_guard::aggregator::{MetricAggregator, generate_summary};
use metric_guard::classifier::{ClassificationRuleSet, read_gitignore_patterns};
use metric_guard::cli::{CheckArgs, Cli, Commands, InitArgs, StatsArgs};
use metric_guard::config::{AnalysisOverride, Config, FileConfigLoader, MetricKind};
use metric_guard::output::{
    AnalysisProgress, CsvFormatter, JsonFormatter, OutputFormat, ReportFormatter, StatsCsvFormatter,
    StatsFormatter, StatsJsonFormatter, StatsTextFormatter, TextFormatter,
};
use metric_guard::rollup::{rollup_by_directory, rollup_by_module};
use metric_guard::scanner::collect_files;
use metric_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS, MetricGuardError};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> metric_guard::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Collect CLI overrides (threshold parsing fails fast, before any
    //    file is analyzed)
    let overrides = build_overrides(
        &args.thresholds,
        &args.include,
        &args.exclude,
        args.no_gitignore,
        args.force_analyze,
    )?;
    let effective = overrides.apply(&config);

    // 3. Compile the classification rule set
    let ruleset = build_ruleset(&effective, &overrides, &args.directory)?;

    // 4. Collect candidate files
    let paths = scan_paths(&args.paths, &args.patterns);
    let files = collect_files(
        &paths,
        &args.patterns,
        &args.directory,
        gitignore_walk(&effective, &overrides),
    )?;
    if files.is_empty() {
        return Err(MetricGuardError::Config(
            "No files found to analyze".to_string(),
        ));
    }
    let files_found = files.len();

    // 5. Analyze
    let aggregator = MetricAggregator::new(effective, ruleset);
    let progress = AnalysisProgress::new(files_found as u64, cli.quiet);
    let reports = aggregator.analyze_files_observed(&files, &mut |_| progress.tick());
    progress.finish();

    // 6. Format and write output
    let summary = generate_summary(&reports);
    let output = match args.format {
        OutputFormat::Text => TextFormatter::new()
            .with_files_found(files_found)
            .format(&reports, &summary)?,
        OutputFormat::Json => JsonFormatter.format(&reports, &summary)?,
        OutputFormat::Csv => CsvFormatter.format(&reports, &summary)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Exit code
    if summary.success {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS)
    }
}

fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_stats_impl(args: &StatsArgs, cli: &Cli) -> metric_guard::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let metrics = parse_metric_names(&args.metrics)?;

    let overrides = build_overrides(
        &[],
        &args.include,
        &args.exclude,
        args.no_gitignore,
        args.force_analyze,
    )?;
    let effective = overrides.apply(&config);

    let ruleset = build_ruleset(&effective, &overrides, &args.directory)?;

    let paths = scan_paths(&args.paths, &args.patterns);
    let files = collect_files(
        &paths,
        &args.patterns,
        &args.directory,
        gitignore_walk(&effective, &overrides),
    )?;
    if files.is_empty() {
        return Err(MetricGuardError::Config(
            "No files found to analyze".to_string(),
        ));
    }

    let aggregator = MetricAggregator::new(effective, ruleset);
    let progress = AnalysisProgress::new(files.len() as u64, cli.quiet);
    let reports = aggregator.analyze_files_observed(&files, &mut |_| progress.tick());
    progress.finish();

    let (stats, heading) = if args.by_module {
        (rollup_by_module(&reports), "module")
    } else {
        (
            rollup_by_directory(&reports, &args.directory, args.depth),
            "directory",
        )
    };

    let output = match args.format {
        OutputFormat::Text => StatsTextFormatter::new(heading)
            .with_metrics(metrics)
            .format(&stats)?,
        OutputFormat::Json => StatsJsonFormatter.format(&stats)?,
        OutputFormat::Csv => StatsCsvFormatter.format(&stats)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(EXIT_SUCCESS)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> metric_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn build_overrides(
    thresholds: &[String],
    include: &[String],
    exclude: &[String],
    no_gitignore: bool,
    force_analyze: bool,
) -> metric_guard::Result<AnalysisOverride> {
    let mut overrides = AnalysisOverride {
        disable_gitignore: no_gitignore,
        force_analyze,
        ..AnalysisOverride::default()
    };

    for threshold in thresholds {
        overrides.parse_threshold(threshold)?;
    }
    for pattern in include {
        overrides.add_include_pattern(pattern);
    }
    for pattern in exclude {
        overrides.add_exclude_pattern(pattern);
    }

    Ok(overrides)
}

fn build_ruleset(
    config: &Config,
    overrides: &AnalysisOverride,
    base_dir: &Path,
) -> metric_guard::Result<ClassificationRuleSet> {
    let mut ignore_patterns = config.ignore_patterns.clone();
    if config.use_gitignore {
        ignore_patterns.extend(read_gitignore_patterns(&base_dir.join(".gitignore"))?);
    }

    ClassificationRuleSet::new(
        base_dir,
        &ignore_patterns,
        &overrides.include_patterns,
        overrides.force_analyze,
    )
}

/// The gitignore-aware walk is a fast path that skips ignored trees during
/// collection. It must stay off whenever an override could re-include a
/// file the walk would never surface; the classifier then remains the only
/// ignore authority.
fn gitignore_walk(config: &Config, overrides: &AnalysisOverride) -> bool {
    config.use_gitignore && !overrides.force_analyze && overrides.include_patterns.is_empty()
}

/// When only glob patterns are given, the default "." path would drag the
/// whole tree in; drop it and let the patterns select.
fn scan_paths(paths: &[PathBuf], patterns: &[String]) -> Vec<PathBuf> {
    let default_path = PathBuf::from(".");
    if !patterns.is_empty() && paths.len() == 1 && paths[0] == default_path {
        return Vec::new();
    }
    paths.to_vec()
}

fn parse_metric_names(names: &[String]) -> metric_guard::Result<Vec<MetricKind>> {
    names
        .iter()
        .map(|name| {
            MetricKind::parse(name).ok_or_else(|| MetricGuardError::UnknownMetric(name.clone()))
        })
        .collect()
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> metric_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> metric_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(MetricGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# metric-guard configuration file

# Gitignore-style patterns excluded from analysis
ignore_patterns = [
    "**/test_*.py",
    "**/*_test.py",
    "**/tests/**",
]

# Merge patterns from .gitignore (default: true)
use_gitignore = true

# Defaults apply to any language without its own rules.
# max_ values check as <=, min_ values as >=.
[defaults]
max_cyclomatic_complexity = 10
max_cognitive_complexity = 15
min_maintainability_index = 50
max_halstead_volume = 1000
max_halstead_difficulty = 10
max_halstead_effort = 10000

# Language-scoped rules replace the defaults entirely for that language.
[[languages]]
name = "python"

[[languages.rules]]
metric = "cyclomatic_complexity"
threshold = 10
comparison = "<="

[[languages.rules]]
metric = "maintainability_index"
threshold = 50
comparison = ">="

[[languages.rules]]
metric = "halstead_volume"
threshold = 1000

[[languages.rules]]
metric = "halstead_difficulty"
threshold = 10

[[languages.rules]]
metric = "halstead_effort"
threshold = 10000

# Needs an analyzer that can measure cognitive complexity
[[languages.rules]]
metric = "cognitive_complexity"
threshold = 15
enabled = false
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
