use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid threshold override: {0}")]
    InvalidOverride(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ignore pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetricGuardError>;
