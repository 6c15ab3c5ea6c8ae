// src/lib.rs

//! repo-ingest: repository listing ingestion
//!
//! Turns listings published by software repositories (plain file lists,
//! HTML tables) into canonical package records that can be compared across
//! repositories.
//!
//! # Architecture
//!
//! - NEVRA codec: decomposes RPM-style file names into name, epoch, version,
//!   release and architecture, and rebuilds canonical version strings
//! - Records: one builder per listing entry, finalized into an immutable record
//! - Parsers: one per listing shape, all yielding records lazily through the
//!   same `iter_parse` contract
//! - Transformer: per-source rewriting of every finalized record

pub mod config;
mod error;
pub mod ingest;
pub mod nevra;
pub mod package;
pub mod parsers;
pub mod transformer;

pub use config::{IngestConfig, IngestSettings, SourceConfig};
pub use error::{Error, Result};
pub use ingest::{IngestReport, SourceOutcome, SourceReport};
pub use nevra::Nevra;
pub use package::{CountingFactory, DefaultFactory, PackageFactory, PackageMaker, PackageRecord};
pub use parsers::{
    ListingFormat, ListingParser, ListingSource, RecordIter, RpmFtpListParser,
    StackageHtmlParser, create_parser,
};
pub use transformer::{NoopTransformer, PackageTransformer, RuleTransformer};
