use std::fs;
use std::path::Path;

use crate::error::{MetricGuardError, Result};

use super::{Config, validate_threshold};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".metric-guard.toml";

/// Loads configuration from TOML files.
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Load configuration from the default location.
    ///
    /// A missing config file is not an error: the built-in defaults apply.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            self.load_from_path(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or invalid.
    pub fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(MetricGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|source| MetricGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Semantic validation beyond what deserialization enforces.
fn validate_config(config: &Config) -> Result<()> {
    for rule in config.defaults.to_rules() {
        validate_threshold(rule.metric, rule.threshold)
            .map_err(|e| MetricGuardError::Config(format!("defaults: {e}")))?;
    }

    for language in &config.languages {
        for rule in &language.rules {
            validate_threshold(rule.metric, rule.threshold)
                .map_err(|e| MetricGuardError::Config(format!("languages.{}: {e}", language.name)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
