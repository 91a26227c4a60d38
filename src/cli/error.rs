//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::guess::GuessError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] GuessError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}
