//! Symbolic Dynamics Command-Line Front End
//!
//! Loads signals from text files, runs the symbolic dynamics pipeline and
//! emits JSON reports or labelled feature datasets.

pub mod loader;
pub mod report;
pub mod settings;

use anyhow::Context;
use feature_engine::run_pipeline;
use std::path::Path;
use storage::{build_dataset, Dataset, FeatureCache, SignalRepository};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub use settings::AppConfig;
pub use report::AnalysisReport;

/// Initialize logging on stderr, leaving stdout for reports
pub fn init_logging(level: Level, json: bool) -> anyhow::Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.context("Failed to set tracing subscriber")
}

/// Analyse one signal file
pub fn analyze_file(path: &Path, word_width: usize) -> anyhow::Result<AnalysisReport> {
    let samples = loader::load_signal_file(path)?;
    let result = run_pipeline(&samples, word_width)
        .with_context(|| format!("Failed to analyse {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!(
        signal = %name,
        samples = samples.len(),
        entropy = result.entropy,
        "Signal analysed"
    );

    Ok(AnalysisReport::new(&name, word_width, &result))
}

/// Ingest a `sim/` + `nao/` directory and build a balanced dataset
pub fn dataset_from_directory(dir: &Path, config: &AppConfig) -> anyhow::Result<Dataset> {
    let repo = SignalRepository::new();
    let summary = loader::ingest_directory(dir, &repo)
        .with_context(|| format!("Failed to ingest {}", dir.display()))?;
    info!(loaded = summary.loaded, skipped = summary.skipped, "Ingested signals");

    let cache = FeatureCache::new(config.cache_capacity);
    let dataset = build_dataset(&repo, &cache, config.word_width, config.dataset_limit)?;
    Ok(dataset)
}
