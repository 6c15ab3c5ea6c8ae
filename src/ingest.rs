// src/ingest.rs

//! Multi-source ingestion run
//!
//! Parses every configured source in order. A source that fails is recorded
//! against that source and the run moves on to the next one, unless the
//! configuration asks to fail fast.

use crate::config::{IngestConfig, SourceConfig};
use crate::error::{Error, Result};
use crate::package::{CountingFactory, PackageRecord};
use crate::parsers::{ListingSource, create_parser};
use crate::transformer::PackageTransformer;
use tracing::{debug, info, warn};

/// What happened to one source during a run
#[derive(Debug)]
pub enum SourceOutcome {
    /// Every entry was parsed
    Parsed { records: usize },
    /// Parsing stopped at an error; `records` were delivered before it
    Failed { records: usize, error: Error },
    /// Not attempted because an earlier source failed in fail-fast mode
    Skipped,
}

#[derive(Debug)]
pub struct SourceReport {
    pub name: String,
    pub outcome: SourceOutcome,
}

/// Per-source results of a run, in configuration order
#[derive(Debug, Default)]
pub struct IngestReport {
    pub sources: Vec<SourceReport>,
}

impl IngestReport {
    /// Records delivered across all sources
    pub fn total_records(&self) -> usize {
        self.sources
            .iter()
            .map(|s| match s.outcome {
                SourceOutcome::Parsed { records } | SourceOutcome::Failed { records, .. } => {
                    records
                }
                SourceOutcome::Skipped => 0,
            })
            .sum()
    }

    pub fn failed(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources
            .iter()
            .filter(|s| matches!(s.outcome, SourceOutcome::Failed { .. }))
    }

    /// True when every source parsed completely
    pub fn is_success(&self) -> bool {
        self.sources
            .iter()
            .all(|s| matches!(s.outcome, SourceOutcome::Parsed { .. }))
    }
}

/// Parse one source, handing each record to `sink`
///
/// Returns the number of records delivered. On error the records already
/// delivered stay delivered; the error carries no partial record.
pub fn parse_source<F>(
    source: &SourceConfig,
    transformer: &dyn PackageTransformer,
    sink: &mut F,
) -> (usize, Result<()>)
where
    F: FnMut(&str, PackageRecord),
{
    let mut delivered = 0;
    let factory = CountingFactory::new();
    let result = drain_source(source, &factory, transformer, sink, &mut delivered);

    debug!(
        "{}: began {} records, delivered {}",
        source.name,
        factory.begun(),
        delivered
    );
    (delivered, result)
}

fn drain_source<F>(
    source: &SourceConfig,
    factory: &CountingFactory,
    transformer: &dyn PackageTransformer,
    sink: &mut F,
    delivered: &mut usize,
) -> Result<()>
where
    F: FnMut(&str, PackageRecord),
{
    let parser = create_parser(source.format)?;
    let listing = ListingSource::open(&source.name, &source.path)?;

    for record in parser.iter_parse(listing, factory, transformer)? {
        sink(&source.name, record?);
        *delivered += 1;
    }
    Ok(())
}

/// Ingest every configured source
pub fn run<F>(config: &IngestConfig, transformer: &dyn PackageTransformer, mut sink: F) -> IngestReport
where
    F: FnMut(&str, PackageRecord),
{
    let mut report = IngestReport::default();
    let mut stop = false;

    for source in &config.sources {
        if stop {
            report.sources.push(SourceReport {
                name: source.name.clone(),
                outcome: SourceOutcome::Skipped,
            });
            continue;
        }

        info!(
            "Parsing {} ({}) from {}",
            source.name,
            source.format,
            source.path.display()
        );

        let outcome = match parse_source(source, transformer, &mut sink) {
            (records, Ok(())) => {
                info!("{}: {} records", source.name, records);
                SourceOutcome::Parsed { records }
            }
            (records, Err(error)) => {
                warn!(
                    "{}: failed after {} records: {}",
                    source.name, records, error
                );
                stop = config.settings.fail_fast;
                SourceOutcome::Failed { records, error }
            }
        };

        report.sources.push(SourceReport {
            name: source.name.clone(),
            outcome,
        });
    }

    report
}
