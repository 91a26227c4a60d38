//! Export functionality
//!
//! Renders guessed relationships for consumers:
//! - SQL (`ALTER TABLE ... FOREIGN KEY` statements)
//! - JSON / YAML (serde on the relationship model)

pub mod sql;

use serde::Serialize;

use crate::models::InferredRelationship;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}

/// Output formats for guessed relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Sql,
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "sql" => Ok(ExportFormat::Sql),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render relationships in the requested format. `dialect` only affects SQL.
pub fn export_relationships(
    relationships: &[InferredRelationship],
    format: ExportFormat,
    dialect: Option<&str>,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => to_json(relationships),
        ExportFormat::Yaml => serde_yaml::to_string(relationships)
            .map_err(|e| ExportError::SerializationError(e.to_string())),
        ExportFormat::Sql => Ok(SQLExporter::export_relationships(relationships, dialect)),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    serde_json::to_string_pretty(value).map_err(|e| ExportError::SerializationError(e.to_string()))
}

// Re-export for convenience
pub use sql::SQLExporter;
