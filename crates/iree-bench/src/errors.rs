use std::io;
use thiserror::Error;

/// Errors raised while building benchmark configurations
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Compile config id '{0}' is used by more than one distinct compile config")]
    DuplicateCompileConfigId(String),

    #[error("Unknown benchmark suite: {0}")]
    UnknownSuite(String),

    #[error("Failed to serialize catalog: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Suite generation failed: {0}")]
    Generation(String),
}

/// Result type for benchmark configuration operations
pub type BenchResult<T> = Result<T, BenchError>;

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for BenchError {
    fn from(err: serde_yaml::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

/// Utility functions for working with BenchError
pub mod util {
    use super::*;

    /// Fail with `InvalidConfig` unless `value` has non-whitespace content
    pub fn ensure_non_empty(value: &str, what: &str) -> BenchResult<()> {
        if value.trim().is_empty() {
            return Err(BenchError::InvalidConfig(format!("{} must not be empty", what)));
        }
        Ok(())
    }
}
