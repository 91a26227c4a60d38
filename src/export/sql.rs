//! SQL exporter for turning guessed relationships into foreign-key DDL.
//!
//! # Security
//!
//! All identifiers are quoted and escaped per dialect. Internal quote
//! characters are escaped by doubling them according to SQL standards.

use crate::models::InferredRelationship;

/// Exporter for `ALTER TABLE ... ADD CONSTRAINT ... FOREIGN KEY` statements.
pub struct SQLExporter;

impl SQLExporter {
    /// Render one relationship as an `ALTER TABLE` statement.
    ///
    /// # Arguments
    ///
    /// * `relationship` - The relationship to export
    /// * `dialect` - Optional SQL dialect ("postgres", "mysql", "sqlserver", etc.)
    ///
    /// # Example
    ///
    /// ```rust
    /// use fk_guess::export::SQLExporter;
    /// use fk_guess::models::InferredRelationship;
    ///
    /// let rel = InferredRelationship::new("orders", "customer_id", "customers", "id");
    /// let sql = SQLExporter::export_relationship(&rel, Some("mysql"));
    /// assert_eq!(
    ///     sql,
    ///     "ALTER TABLE `orders` ADD CONSTRAINT `fk_orders_customer_id` \
    ///      FOREIGN KEY (`customer_id`) REFERENCES `customers` (`id`);"
    /// );
    /// ```
    pub fn export_relationship(relationship: &InferredRelationship, dialect: Option<&str>) -> String {
        let dialect = dialect.unwrap_or("standard");
        format!(
            "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({});",
            Self::quote_identifier(&relationship.source_table, dialect),
            Self::quote_identifier(&Self::constraint_name(relationship), dialect),
            Self::quote_identifier(&relationship.source_column, dialect),
            Self::quote_identifier(&relationship.target_table, dialect),
            Self::quote_identifier(&relationship.target_column, dialect),
        )
    }

    /// Render every relationship, one statement per line.
    pub fn export_relationships(
        relationships: &[InferredRelationship],
        dialect: Option<&str>,
    ) -> String {
        relationships
            .iter()
            .map(|rel| Self::export_relationship(rel, dialect))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Constraint name used for a relationship: `fk_<table>_<column>`
    pub fn constraint_name(relationship: &InferredRelationship) -> String {
        format!(
            "fk_{}_{}",
            relationship.source_table, relationship.source_column
        )
    }

    /// Quote an identifier for the given dialect, escaping internal quotes.
    fn quote_identifier(identifier: &str, dialect: &str) -> String {
        match dialect {
            "mysql" => {
                // MySQL uses backticks; escape internal backticks by doubling
                format!("`{}`", identifier.replace('`', "``"))
            }
            "sqlserver" | "mssql" => {
                // SQL Server uses brackets; escape ] by doubling
                format!("[{}]", identifier.replace(']', "]]"))
            }
            _ => format!("\"{}\"", identifier.replace('"', "\"\"")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel() -> InferredRelationship {
        InferredRelationship::new("orders", "customer_id", "customers", "id")
    }

    #[test]
    fn test_standard_dialect() {
        assert_eq!(
            SQLExporter::export_relationship(&rel(), None),
            r#"ALTER TABLE "orders" ADD CONSTRAINT "fk_orders_customer_id" FOREIGN KEY ("customer_id") REFERENCES "customers" ("id");"#
        );
    }

    #[test]
    fn test_sqlserver_dialect() {
        let sql = SQLExporter::export_relationship(&rel(), Some("mssql"));
        assert!(sql.starts_with("ALTER TABLE [orders] ADD CONSTRAINT [fk_orders_customer_id]"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let rel = InferredRelationship::new("we\"ird", "a_id", "as", "id");
        let sql = SQLExporter::export_relationship(&rel, Some("postgres"));
        assert!(sql.contains(r#"ALTER TABLE "we""ird""#));
    }

    #[test]
    fn test_export_many() {
        let rels = vec![
            rel(),
            InferredRelationship::new("ledger", "acct_ref", "accounts", "id"),
        ];
        let sql = SQLExporter::export_relationships(&rels, Some("postgres"));
        assert_eq!(sql.lines().count(), 2);
        assert!(sql.lines().nth(1).unwrap().contains(r#"REFERENCES "accounts" ("id")"#));
    }

    #[test]
    fn test_export_none() {
        assert_eq!(SQLExporter::export_relationships(&[], None), "");
    }
}
