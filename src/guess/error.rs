//! Error types for relationship guessing

use thiserror::Error;

/// Errors raised while configuring relationship guessing
///
/// Inference itself never fails; every variant here surfaces before a pass
/// starts (loading metadata, reading configuration, compiling patterns).
#[derive(Error, Debug, Clone)]
pub enum GuessError {
    /// A foreign-key pattern failed to compile
    #[error("Invalid foreign key pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Catalog or configuration document could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for GuessError {
    fn from(e: serde_json::Error) -> Self {
        GuessError::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for GuessError {
    fn from(e: serde_yaml::Error) -> Self {
        GuessError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for GuessError {
    fn from(e: std::io::Error) -> Self {
        GuessError::Io(e.to_string())
    }
}
