//! Models module for the SDK
//!
//! Defines the schema metadata consumed by relationship guessing and the
//! relationship records it produces.

pub mod catalog;
pub mod column;
pub mod relationship;

pub use catalog::{Catalog, IndexColumnGroup, Indexes, PrimaryKeyColumnGroup, PrimaryKeys};
pub use column::Column;
pub use relationship::InferredRelationship;
