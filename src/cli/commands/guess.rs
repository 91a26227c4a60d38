//! Guess command implementation

use std::io::Read;
use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::output::format_summary;
use crate::export::{ExportFormat, export_relationships};
use crate::guess::{GuessConfig, GuessError, HeuristicKind};
use crate::inference::RelationshipInferrer;
use crate::models::Catalog;
use crate::models::catalog::is_yaml_path;

/// Arguments for the guess command
#[derive(Debug, Clone)]
pub struct GuessArgs {
    /// Catalog file, or "-" for stdin
    pub catalog: String,
    /// Optional configuration file
    pub config: Option<PathBuf>,
    /// Heuristics overriding the configuration's selection
    pub heuristics: Vec<HeuristicKind>,
    /// Output format
    pub format: ExportFormat,
    /// SQL dialect for SQL output
    pub dialect: Option<String>,
    /// Collapse repeated relationships before output
    pub dedup: bool,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
}

/// Load the catalog from a file or stdin. Stdin is read as YAML, which also
/// accepts JSON documents.
fn load_catalog(input: &str) -> Result<Catalog, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        return Ok(Catalog::from_yaml_str(&content)?);
    }

    let path = PathBuf::from(input);
    let content =
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path.clone(), e.to_string()))?;
    let catalog = if is_yaml_path(&path) {
        Catalog::from_yaml_str(&content)?
    } else {
        Catalog::from_json_str(&content)?
    };
    Ok(catalog)
}

fn load_config(args: &GuessArgs) -> Result<GuessConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => GuessConfig::from_path(path).map_err(|e| match e {
            GuessError::Io(msg) => CliError::FileReadError(path.clone(), msg),
            other => CliError::ConfigError(other),
        })?,
        None => GuessConfig::default(),
    };
    if !args.heuristics.is_empty() {
        config.heuristics = args.heuristics.clone();
    }
    Ok(config)
}

/// Run inference and render the result as a string
pub fn run_guess(args: &GuessArgs) -> Result<String, CliError> {
    let catalog = load_catalog(&args.catalog)?;
    let config = load_config(args)?;
    let inferrer = RelationshipInferrer::from_config(&config)?;

    let (mut relationships, stats) = inferrer.infer_with_stats(&catalog);
    if args.dedup {
        relationships.sort();
        relationships.dedup();
    }

    eprintln!("{}", format_summary(&stats, &config, relationships.len()));

    Ok(export_relationships(
        &relationships,
        args.format,
        args.dialect.as_deref(),
    )?)
}

/// Handle the guess command
pub fn handle_guess(args: &GuessArgs) -> Result<(), CliError> {
    let rendered = run_guess(args)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
            eprintln!("Wrote relationships to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InferredRelationship;
    use std::io::Write;

    const CATALOG: &str = r#"
indexes:
  orders:
    - - name: customer_id
        type: int
  ledger:
    - - name: acct_ref
        type: int
primaryKeys:
  customers:
    - name: id
      type: int
  accounts:
    - name: id
      type: int
"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(catalog: &tempfile::NamedTempFile) -> GuessArgs {
        GuessArgs {
            catalog: catalog.path().display().to_string(),
            config: None,
            heuristics: Vec::new(),
            format: ExportFormat::Sql,
            dialect: Some("postgres".to_string()),
            dedup: false,
            output: None,
        }
    }

    #[test]
    fn test_guess_with_defaults() {
        let catalog = write_temp(".yaml", CATALOG);
        let sql = run_guess(&args(&catalog)).unwrap();
        assert_eq!(
            sql,
            r#"ALTER TABLE "orders" ADD CONSTRAINT "fk_orders_customer_id" FOREIGN KEY ("customer_id") REFERENCES "customers" ("id");"#
        );
    }

    #[test]
    fn test_guess_with_pattern_config() {
        let catalog = write_temp(".yaml", CATALOG);
        let config = write_temp(
            ".yml",
            "heuristics: [pattern]\npatterns:\n  - pattern: \"^acct_\"\n    table: accounts\n    column: id\n",
        );
        let mut args = args(&catalog);
        args.config = Some(config.path().to_path_buf());
        let sql = run_guess(&args).unwrap();
        assert!(sql.contains(r#"ALTER TABLE "ledger""#));
        assert!(!sql.contains(r#"ALTER TABLE "orders""#));
    }

    #[test]
    fn test_dedup_collapses_repeats() {
        let catalog = write_temp(
            ".json",
            r#"{
                "indexes": {"orders": [
                    [{"name": "customer_id", "type": "int"}],
                    [{"name": "customer_id", "type": "int"}]
                ]},
                "primaryKeys": {"customers": [{"name": "id", "type": "int"}]}
            }"#,
        );
        let mut args = args(&catalog);
        args.heuristics = vec![HeuristicKind::TableColumn];
        args.format = ExportFormat::Json;

        let json = run_guess(&args).unwrap();
        let rels: Vec<InferredRelationship> = serde_json::from_str(&json).unwrap();
        assert_eq!(rels.len(), 2);

        args.dedup = true;
        let json = run_guess(&args).unwrap();
        let rels: Vec<InferredRelationship> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            rels,
            vec![InferredRelationship::new("orders", "customer_id", "customers", "id")]
        );
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let catalog = write_temp(".yaml", CATALOG);
        let config = write_temp(
            ".json",
            r#"{"patterns": [{"pattern": "(", "table": "accounts", "column": "id"}]}"#,
        );
        let mut args = args(&catalog);
        args.config = Some(config.path().to_path_buf());
        assert!(matches!(
            run_guess(&args),
            Err(CliError::ConfigError(GuessError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn test_missing_catalog() {
        let mut args = args(&write_temp(".yaml", CATALOG));
        args.catalog = "/nonexistent/catalog.yaml".to_string();
        assert!(matches!(run_guess(&args), Err(CliError::FileReadError(..))));
    }

    #[test]
    fn test_write_output_file() {
        let catalog = write_temp(".yaml", CATALOG);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fks.sql");
        let mut args = args(&catalog);
        args.output = Some(out.clone());
        handle_guess(&args).unwrap();
        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.contains("FOREIGN KEY"));
    }
}
