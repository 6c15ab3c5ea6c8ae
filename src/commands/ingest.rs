// src/commands/ingest.rs
//! Multi-source ingestion command

use super::print_record;
use anyhow::{Context, Result, bail};
use repo_ingest::ingest;
use repo_ingest::{IngestConfig, NoopTransformer, PackageTransformer, RuleTransformer, SourceOutcome};
use std::path::Path;
use tracing::{info, warn};

/// Ingest every configured source, printing records as they are produced
pub fn cmd_ingest(config_path: &Path, pretty: bool) -> Result<()> {
    let config = IngestConfig::load(config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    info!(
        "Loaded {} sources from {}",
        config.sources.len(),
        config_path.display()
    );

    let transformer: Box<dyn PackageTransformer> = match &config.settings.rules {
        Some(path) => Box::new(
            RuleTransformer::load(path)
                .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        ),
        None => Box::new(NoopTransformer),
    };

    let mut print_error = None;
    let report = ingest::run(&config, transformer.as_ref(), |source, record| {
        if print_error.is_none() {
            if let Err(e) = print_record(&record, source, pretty) {
                print_error = Some(e);
            }
        }
    });
    if let Some(e) = print_error {
        return Err(e.context("Failed to write records"));
    }

    eprintln!("Sources:");
    for source in &report.sources {
        match &source.outcome {
            SourceOutcome::Parsed { records } => {
                eprintln!("  [ok]   {} ({} records)", source.name, records);
            }
            SourceOutcome::Failed { records, error } => {
                eprintln!(
                    "  [fail] {} after {} records: {}",
                    source.name, records, error
                );
            }
            SourceOutcome::Skipped => eprintln!("  [skip] {}", source.name),
        }
    }
    eprintln!("Total: {} records", report.total_records());

    let failed = report.failed().count();
    if failed > 0 {
        warn!("{} of {} sources failed", failed, report.sources.len());
        bail!("{} of {} sources failed", failed, report.sources.len());
    }
    Ok(())
}
