//! Symbolic Dynamics Analyzer - Main Entry Point

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use symdyn_cli::{analyze_file, dataset_from_directory, init_logging, AppConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "symdyn")]
#[command(version)]
#[command(about = "Symbolic dynamics entropy and feature extraction for EEG-like signals", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./symdyn.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one signal file and print a JSON report
    Analyze {
        /// Whitespace-separated samples
        file: PathBuf,

        /// Word width
        #[arg(short)]
        m: Option<usize>,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },

    /// Build a labelled feature dataset from `sim/` and `nao/` subdirectories
    Dataset {
        /// Directory holding `sim/` and `nao/`
        dir: PathBuf,

        /// Word width
        #[arg(short)]
        m: Option<usize>,

        /// Signals per label
        #[arg(long)]
        limit: Option<usize>,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.json_logs {
        config.log_json = true;
    }
    init_logging(config.log_level()?, config.log_json)?;

    info!("=== symdyn v{} ===", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze { file, m, pretty } => {
            let word_width = m.unwrap_or(config.word_width);
            let report = analyze_file(&file, word_width)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
        Commands::Dataset {
            dir,
            m,
            limit,
            output,
        } => {
            if let Some(m) = m {
                config.word_width = m;
            }
            if let Some(limit) = limit {
                config.dataset_limit = limit;
            }

            let dataset = dataset_from_directory(&dir, &config)?;
            let json = serde_json::to_string_pretty(&dataset)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), rows = dataset.len(), "Dataset written");
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
