//! Relationship model for the SDK

use std::fmt;

use serde::{Deserialize, Serialize};

/// A guessed foreign-key relationship
///
/// `source_table.source_column` is believed to reference
/// `target_table.target_column`. The record carries no identity beyond its
/// four fields, and the inference pass may emit the same record more than once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct InferredRelationship {
    /// Referencing table
    pub source_table: String,
    /// Referencing column
    pub source_column: String,
    /// Referenced table
    pub target_table: String,
    /// Referenced primary-key column
    pub target_column: String,
}

impl InferredRelationship {
    pub fn new(
        source_table: impl Into<String>,
        source_column: impl Into<String>,
        target_table: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            source_table: source_table.into(),
            source_column: source_column.into(),
            target_table: target_table.into(),
            target_column: target_column.into(),
        }
    }
}

impl fmt::Display for InferredRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.source_table, self.source_column, self.target_table, self.target_column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rel = InferredRelationship::new("orders", "customer_id", "customers", "id");
        assert_eq!(rel.to_string(), "orders.customer_id -> customers.id");
    }

    #[test]
    fn test_serialize_camel_case() {
        let rel = InferredRelationship::new("orders", "customer_id", "customers", "id");
        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["sourceTable"], "orders");
        assert_eq!(json["targetColumn"], "id");
    }
}
