//! Catalog metadata consumed by relationship guessing

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::column::Column;
use crate::guess::GuessError;

/// Ordered columns forming one index (unique or not) on a table
pub type IndexColumnGroup = Vec<Column>;

/// Ordered columns forming a table's primary key
pub type PrimaryKeyColumnGroup = Vec<Column>;

/// Table name -> every index declared on that table
pub type Indexes = HashMap<String, Vec<IndexColumnGroup>>;

/// Table name -> the table's primary key (tables without one are absent)
pub type PrimaryKeys = HashMap<String, PrimaryKeyColumnGroup>;

/// Index and primary-key metadata extracted from a schema
///
/// Both sections are optional in serialized form and default to empty.
///
/// ```yaml
/// indexes:
///   orders:
///     - - name: customer_id
///         type: int
/// primaryKeys:
///   customers:
///     - name: id
///       type: int
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub indexes: Indexes,
    #[serde(default, alias = "primary_keys")]
    pub primary_keys: PrimaryKeys,
}

impl Catalog {
    pub fn new(indexes: Indexes, primary_keys: PrimaryKeys) -> Self {
        Self {
            indexes,
            primary_keys,
        }
    }

    /// Parse a catalog from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GuessError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a catalog from JSON
    pub fn from_json_str(json: &str) -> Result<Self, GuessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog file; `.yaml` and `.yml` are read as YAML, anything else as JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GuessError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if is_yaml_path(path) {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Add an index on `table`
    pub fn add_index(&mut self, table: impl Into<String>, columns: IndexColumnGroup) {
        self.indexes.entry(table.into()).or_default().push(columns);
    }

    /// Set the primary key of `table`, replacing any previous one
    pub fn set_primary_key(&mut self, table: impl Into<String>, columns: PrimaryKeyColumnGroup) {
        self.primary_keys.insert(table.into(), columns);
    }
}

pub(crate) fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_catalog() {
        let yaml = r#"
indexes:
  orders:
    - - name: customer_id
        type: int
    - - name: placed_at
        type: datetime
      - name: status
        type: varchar
primaryKeys:
  customers:
    - name: id
      type: int
"#;
        let catalog = Catalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.indexes["orders"].len(), 2);
        assert_eq!(catalog.indexes["orders"][1].len(), 2);
        assert_eq!(catalog.primary_keys["customers"][0], Column::new("id", "int"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.indexes.is_empty());
        assert!(catalog.primary_keys.is_empty());
    }

    #[test]
    fn test_snake_case_primary_keys_alias() {
        let json = r#"{"primary_keys": {"users": [{"name": "id", "type": "int"}]}}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert!(catalog.primary_keys.contains_key("users"));
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        let err = Catalog::from_json_str("{\"indexes\": 3}").unwrap_err();
        assert!(matches!(err, GuessError::Parse(_)));
    }

    #[test]
    fn test_builder_methods() {
        let mut catalog = Catalog::default();
        catalog.add_index("orders", vec![Column::new("customer_id", "int")]);
        catalog.add_index("orders", vec![Column::new("total", "decimal")]);
        catalog.set_primary_key("customers", vec![Column::new("id", "int")]);
        assert_eq!(catalog.indexes["orders"].len(), 2);
        assert_eq!(catalog.primary_keys.len(), 1);
    }
}
