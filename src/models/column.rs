//! Column model for the SDK

use serde::{Deserialize, Serialize};

/// Column model representing one indexed or primary-key field of a table
///
/// Only the two attributes that relationship guessing looks at are kept: the
/// column name and its type descriptor. The type descriptor is opaque and is
/// compared verbatim, so callers are expected to normalize it upstream.
///
/// # Example
///
/// ```rust
/// use fk_guess::models::Column;
///
/// let column = Column::new("customer_id", "int");
/// assert_eq!(column.data_type, "int");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Type descriptor (e.g. "int", "bigint unsigned", "varchar(255)")
    #[serde(rename = "type", alias = "dataType", alias = "data_type")]
    pub data_type: String,
}

impl Column {
    /// Create a new column with the given name and type descriptor
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}
