//! Heuristics for guessing foreign keys
//!
//! Each heuristic decides, for one candidate triple of
//! (indexed column, table owning a primary key, primary-key column), whether
//! the indexed column plausibly references that primary key. Heuristics are
//! independent of each other; callers pick any subset and the inference pass
//! applies all of them.
//!
//! ## Example
//!
//! ```rust
//! use fk_guess::guess::{Heuristic, TableColumnHeuristic};
//! use fk_guess::models::Column;
//!
//! let heuristic = TableColumnHeuristic::new();
//! assert!(heuristic.matches(
//!     &Column::new("customer_id", "int"),
//!     "customers",
//!     &Column::new("id", "int"),
//! ));
//! ```

mod config;
mod error;
mod pattern;
mod primary_key;
mod table_column;

pub use config::{GuessConfig, GuessConfigBuilder, HeuristicKind, PatternRule};
pub use error::GuessError;
pub use pattern::{ForeignKeyPattern, PatternHeuristic};
pub use primary_key::PrimaryKeyHeuristic;
pub use table_column::{TableColumnHeuristic, referenced_table_name};

use crate::models::Column;

/// Conventional name of surrogate primary keys
pub const GENERIC_ID_COLUMN: &str = "id";

/// Suffix marking a column as a reference to another table's `id`
pub const TARGET_COLUMN_SUFFIX: &str = "_id";

/// A foreign-key guessing predicate
pub trait Heuristic: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether `column` plausibly references `primary_key`, the primary key of `table`
    fn matches(&self, column: &Column, table: &str, primary_key: &Column) -> bool;
}

impl<F> Heuristic for F
where
    F: Fn(&Column, &str, &Column) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn matches(&self, column: &Column, table: &str, primary_key: &Column) -> bool {
        self(column, table, primary_key)
    }
}

/// Whether a column of `column_type` can hold values of a `primary_key_type` key.
///
/// Exact equality only: `int` and `bigint` (or signed and unsigned variants)
/// are treated as different types.
pub fn is_type_compatible(column_type: &str, primary_key_type: &str) -> bool {
    column_type == primary_key_type
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_compatibility_is_exact() {
        assert!(is_type_compatible("int", "int"));
        assert!(!is_type_compatible("int", "bigint"));
        assert!(!is_type_compatible("int unsigned", "int"));
        assert!(!is_type_compatible("int", "varchar"));
    }

    #[test]
    fn test_closure_is_heuristic() {
        let h = |c: &Column, _t: &str, pk: &Column| c.name.ends_with(&pk.name);
        assert_eq!(Heuristic::name(&h), "custom");
        assert!(h.matches(&Column::new("owner_uuid", "uuid"), "users", &Column::new("uuid", "uuid")));
    }
}
