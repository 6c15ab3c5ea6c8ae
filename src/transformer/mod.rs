// src/transformer/mod.rs

//! Per-source record normalization
//!
//! Parsers hand each finalized record to a [`PackageTransformer`] together
//! with the name of the listing it came from. The parsers treat the
//! transformer as opaque; [`RuleTransformer`] is a rule-file driven
//! implementation used by the CLI.

mod rules;

pub use rules::{NameMatch, RuleSpec, RuleTransformer};

use crate::package::PackageRecord;

/// Rewrites records according to site-specific rules
pub trait PackageTransformer {
    /// Called exactly once per finalized record
    fn process(&self, record: PackageRecord, source: &str) -> PackageRecord;
}

/// Transformer that returns every record unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTransformer;

impl PackageTransformer for NoopTransformer {
    fn process(&self, record: PackageRecord, _source: &str) -> PackageRecord {
        record
    }
}
