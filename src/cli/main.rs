//! fk-guess: print foreign keys guessed from index and primary-key metadata

use std::path::PathBuf;

use clap::Parser;
use fk_guess::cli::commands::{GuessArgs, handle_guess};
use fk_guess::export::ExportFormat;
use fk_guess::guess::HeuristicKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fk-guess")]
#[command(version, about = "Guess foreign keys from indexes and primary keys", long_about = None)]
struct Cli {
    /// Catalog file (YAML or JSON), or "-" to read from stdin
    catalog: String,

    /// Heuristic configuration file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Heuristic to apply; repeat to select several (overrides the config file selection)
    #[arg(long = "heuristic", value_parser = parse_heuristic)]
    heuristics: Vec<HeuristicKind>,

    /// Output format: json, yaml or sql
    #[arg(short, long, default_value = "json", value_parser = parse_format)]
    format: ExportFormat,

    /// SQL dialect for sql output (postgres, mysql, sqlserver)
    #[arg(long)]
    dialect: Option<String>,

    /// Drop repeated relationships from the output
    #[arg(long)]
    dedup: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_heuristic(s: &str) -> Result<HeuristicKind, String> {
    s.parse().map_err(|e: fk_guess::guess::GuessError| e.to_string())
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e: fk_guess::export::ExportError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let args = GuessArgs {
        catalog: cli.catalog,
        config: cli.config,
        heuristics: cli.heuristics,
        format: cli.format,
        dialect: cli.dialect,
        dedup: cli.dedup,
        output: cli.output,
    };

    handle_guess(&args)?;
    Ok(())
}
