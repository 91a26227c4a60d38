//! Same-name-as-primary-key heuristic

use super::{GENERIC_ID_COLUMN, Heuristic, is_type_compatible};
use crate::models::Column;

/// Treats a column as a foreign key when it shares its name with another
/// table's primary key
///
/// Primary keys named with the generic identifier (`id`) are ignored, since
/// nearly every table would otherwise match. The idea comes from SchemaSpy's
/// `DbAnalyzer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimaryKeyHeuristic;

impl PrimaryKeyHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for PrimaryKeyHeuristic {
    fn name(&self) -> &str {
        "primary-key"
    }

    fn matches(&self, column: &Column, _table: &str, primary_key: &Column) -> bool {
        is_type_compatible(&column.data_type, &primary_key.data_type)
            && column.name == primary_key.name
            && primary_key.name != GENERIC_ID_COLUMN
    }
}
