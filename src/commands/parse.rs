// src/commands/parse.rs
//! Single listing parse command

use super::print_record;
use anyhow::{Context, Result};
use repo_ingest::{
    DefaultFactory, ListingFormat, ListingSource, NoopTransformer, PackageTransformer,
    RuleTransformer, create_parser,
};
use std::path::Path;
use tracing::info;

/// Parse one listing file and print its records
pub fn cmd_parse(
    file: &Path,
    format: &str,
    source: Option<&str>,
    rules: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let format = ListingFormat::from_name(format)?;
    let source_name = match source {
        Some(name) => name.to_string(),
        None => file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "listing".to_string()),
    };

    let transformer: Box<dyn PackageTransformer> = match rules {
        Some(path) => Box::new(
            RuleTransformer::load(path)
                .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        ),
        None => Box::new(NoopTransformer),
    };

    info!("Parsing {} as {} ({})", file.display(), format, source_name);

    let listing = ListingSource::open(source_name.as_str(), file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let parser = create_parser(format)?;

    let mut count = 0usize;
    for record in parser.iter_parse(listing, &DefaultFactory, transformer.as_ref())? {
        let record = record.with_context(|| {
            format!("{}: parse failed after {} records", source_name, count)
        })?;
        print_record(&record, &source_name, pretty)?;
        count += 1;
    }

    info!("{}: {} records", source_name, count);
    Ok(())
}
