//! Table-and-suffix heuristic

use super::{GENERIC_ID_COLUMN, Heuristic, TARGET_COLUMN_SUFFIX, is_type_compatible};
use crate::models::Column;

/// Treats `<singular>_id` as a reference to the generic `id` primary key of
/// the table named by the plural of `<singular>`
///
/// `customer_id` references `customers.id`, `category_id` references
/// `categories.id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableColumnHeuristic;

impl TableColumnHeuristic {
    pub fn new() -> Self {
        Self
    }
}

/// Table name a `<singular>_id` column points at, if the column carries the suffix
pub fn referenced_table_name(column_name: &str) -> Option<String> {
    column_name
        .strip_suffix(TARGET_COLUMN_SUFFIX)
        .map(|singular| pluralizer::pluralize(singular, 2, false))
}

impl Heuristic for TableColumnHeuristic {
    fn name(&self) -> &str {
        "table-column"
    }

    fn matches(&self, column: &Column, table: &str, primary_key: &Column) -> bool {
        if !is_type_compatible(&column.data_type, &primary_key.data_type) {
            return false;
        }
        if primary_key.name != GENERIC_ID_COLUMN {
            return false;
        }

        referenced_table_name(&column.name).is_some_and(|plural| plural == table)
    }
}
