// src/parsers/mod.rs

//! Listing parsers for upstream repository indexes
//!
//! Each upstream listing shape has one parser implementing [`ListingParser`].
//! A parse consumes a [`ListingSource`] and yields records lazily: nothing is
//! read ahead of what the caller pulls, and dropping the iterator releases
//! the source. Every yielded record has already been finalized and passed
//! through the transformer.

pub mod ftplist;
pub mod registry;
pub mod stackage;

pub use ftplist::RpmFtpListParser;
pub use registry::{ListingFormat, create_parser};
pub use stackage::StackageHtmlParser;

use crate::error::Result;
use crate::package::{PackageFactory, PackageRecord};
use crate::transformer::PackageTransformer;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Lazy, non-restartable sequence of parsed records
pub type RecordIter<'a> = Box<dyn Iterator<Item = Result<PackageRecord>> + 'a>;

/// An already-opened listing, named after the upstream source it came from
pub struct ListingSource {
    name: String,
    reader: Box<dyn BufRead>,
}

impl ListingSource {
    /// Open a listing file
    pub fn open(name: impl Into<String>, path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(name, BufReader::new(file)))
    }

    pub fn from_reader<R: BufRead + 'static>(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// In-memory listing, mostly useful for tests
    pub fn from_string(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::from_reader(name, Cursor::new(content.into()))
    }

    /// Source name passed to the transformer
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_parts(self) -> (String, Box<dyn BufRead>) {
        (self.name, self.reader)
    }
}

impl std::fmt::Debug for ListingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Common interface for all listing formats
pub trait ListingParser {
    /// Parse a listing into a lazy sequence of records
    ///
    /// The sequence ends after the first error; no partial record is ever
    /// yielded.
    fn iter_parse<'a>(
        &self,
        source: ListingSource,
        factory: &'a dyn PackageFactory,
        transformer: &'a dyn PackageTransformer,
    ) -> Result<RecordIter<'a>>;
}
