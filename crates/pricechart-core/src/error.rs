// File: crates/pricechart-core/src/error.rs
// Summary: Error types for the fallible edges of the core (bar ingestion, configuration).

use thiserror::Error;

/// Rejection of an input bar sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("bar {index} is invalid: {reason}")]
    InvalidBar { index: usize, reason: &'static str },
    #[error("bar {index} is not strictly after the previous bar's date")]
    Unsorted { index: usize },
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported value {value} for {field} (allowed: {allowed})")]
    Unsupported {
        field: &'static str,
        value: String,
        allowed: String,
    },
}
