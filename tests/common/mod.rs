#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a metric-guard config that checks cyclomatic complexity only,
    /// keeping the heuristic Halstead estimates out of the way.
    pub fn create_cyclomatic_config(&self, threshold: usize) {
        let mut content = String::new();
        let _ = writeln!(content, "[[languages]]");
        let _ = writeln!(content, "name = \"python\"");
        let _ = writeln!(content);
        let _ = writeln!(content, "[[languages.rules]]");
        let _ = writeln!(content, "metric = \"cyclomatic_complexity\"");
        let _ = writeln!(content, "threshold = {threshold}");
        self.create_file(".metric-guard.toml", &content);
    }

    /// Creates a module-level Python file with the given number of decision
    /// points (cyclomatic complexity = decisions + 1).
    pub fn create_python_file(&self, relative_path: &str, decisions: usize) {
        let mut content = String::from("a = 1\n");
        for i in 0..decisions {
            let _ = writeln!(content, "b{i} = 1\nwhile b{i}:\n    b{i} -= 1");
        }
        self.create_file(relative_path, &content);
    }

    /// Marks a directory as a Python package.
    pub fn mark_package(&self, relative_path: &str) {
        self.create_dir(relative_path);
        self.create_file(&format!("{relative_path}/__init__.py"), "");
    }
}
