//! Explicit-pattern heuristic

use regex::Regex;

use super::error::GuessError;
use super::{Heuristic, is_type_compatible};
use crate::models::Column;

/// A user supplied rule: columns whose name matches `regex` reference
/// `table.column`
#[derive(Debug, Clone)]
pub struct ForeignKeyPattern {
    regex: Regex,
    table: String,
    column: String,
}

impl ForeignKeyPattern {
    /// Compile a rule. An invalid pattern is rejected here, never at match time.
    pub fn new(
        pattern: &str,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Result<Self, GuessError> {
        let regex = Regex::new(pattern).map_err(|e| GuessError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            regex,
            table: table.into(),
            column: column.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    fn applies_to(&self, column: &Column, table: &str, primary_key: &Column) -> bool {
        self.table == table && self.column == primary_key.name && self.regex.is_match(&column.name)
    }
}

/// Matches when any configured rule targets the candidate primary key and
/// its pattern matches the candidate column name
#[derive(Debug, Clone, Default)]
pub struct PatternHeuristic {
    patterns: Vec<ForeignKeyPattern>,
}

impl PatternHeuristic {
    pub fn new(patterns: Vec<ForeignKeyPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[ForeignKeyPattern] {
        &self.patterns
    }
}

impl Heuristic for PatternHeuristic {
    fn name(&self) -> &str {
        "pattern"
    }

    fn matches(&self, column: &Column, table: &str, primary_key: &Column) -> bool {
        is_type_compatible(&column.data_type, &primary_key.data_type)
            && self
                .patterns
                .iter()
                .any(|p| p.applies_to(column, table, primary_key))
    }
}
