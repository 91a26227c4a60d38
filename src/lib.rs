//! fk-guess - infer foreign-key relationships from schema metadata
//!
//! Schemas often lack declared foreign keys. Given each table's indexes and
//! primary key, this crate guesses which indexed columns reference which
//! primary keys using naming and type heuristics.
//!
//! Provides:
//! - Catalog models (columns, index groups, primary keys)
//! - Heuristics (same-name primary key, `<table>_id` suffix, explicit patterns)
//! - The inference pass and its configuration
//! - Export of guessed relationships as SQL, JSON or YAML

pub mod cli;
pub mod export;
pub mod guess;
pub mod inference;
pub mod models;

pub use export::{ExportError, ExportFormat, SQLExporter, export_relationships};
pub use guess::{
    ForeignKeyPattern, GuessConfig, GuessError, Heuristic, HeuristicKind, PatternHeuristic,
    PrimaryKeyHeuristic, TableColumnHeuristic,
};
pub use inference::{InferenceStats, RelationshipInferrer, guess_constraints};
pub use models::{Catalog, Column, Indexes, InferredRelationship, PrimaryKeys};
