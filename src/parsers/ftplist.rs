// src/parsers/ftplist.rs

//! Parser for plain RPM file lists
//!
//! The listing is a mirror's file index, one artifact per line, possibly with
//! `ls -l` style columns in front:
//!
//! ```text
//! -rw-r--r--  1 ftp ftp  52312 Jan 02 10:00 bash-5.2.26-3.fc40.src.rpm
//! zlib-1.3.1-1.fc40.src.rpm
//! ```
//!
//! The list is machine generated, so a line that does not decompose into a
//! NEVRA ends the whole parse with an error.

use super::{ListingParser, ListingSource, RecordIter};
use crate::error::Result;
use crate::nevra::{self, Nevra};
use crate::package::{PackageFactory, PackageRecord};
use crate::transformer::PackageTransformer;
use std::io::{BufRead, Lines};
use tracing::debug;

/// Extra field holding the `name-version-release` part of the file name
pub const NEVR_FIELD: &str = "nevr";

#[derive(Debug, Default, Clone, Copy)]
pub struct RpmFtpListParser;

impl RpmFtpListParser {
    pub fn new() -> Self {
        Self
    }
}

impl ListingParser for RpmFtpListParser {
    fn iter_parse<'a>(
        &self,
        source: ListingSource,
        factory: &'a dyn PackageFactory,
        transformer: &'a dyn PackageTransformer,
    ) -> Result<RecordIter<'a>> {
        let (source_name, reader) = source.into_parts();
        debug!("Parsing RPM file list for {}", source_name);

        Ok(Box::new(FtpListRecords {
            source_name,
            lines: Some(reader.lines()),
            line_no: 0,
            factory,
            transformer,
        }))
    }
}

struct FtpListRecords<'a> {
    source_name: String,
    /// Dropped as soon as the listing is exhausted or fails
    lines: Option<Lines<Box<dyn BufRead>>>,
    line_no: usize,
    factory: &'a dyn PackageFactory,
    transformer: &'a dyn PackageTransformer,
}

impl FtpListRecords<'_> {
    fn parse_entry(&self, filename: &str) -> Result<PackageRecord> {
        let mut pkg = self.factory.begin();

        let stem = nevra::strip_package_suffix(filename);
        let nevra = Nevra::parse(stem)?;

        pkg.set_name(&nevra.name);
        pkg.set_version(&nevra.version);
        pkg.set_rawversion(nevra.raw_version());

        // Parse succeeded, so the stem always has an ".arch" to cut
        let nevr = stem.rsplit_once('.').map_or(stem, |(nevr, _)| nevr);
        pkg.set_extra_field(NEVR_FIELD, nevr)?;

        pkg.finalize()
    }

    fn finish(&mut self) {
        if self.lines.take().is_some() {
            debug!(
                "Finished RPM file list for {} after {} lines",
                self.source_name, self.line_no
            );
        }
    }
}

impl Iterator for FtpListRecords<'_> {
    type Item = Result<PackageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.as_mut()?.next() {
                None => {
                    self.finish();
                    return None;
                }
                Some(Err(e)) => {
                    self.finish();
                    return Some(Err(e.into()));
                }
                Some(Ok(line)) => line,
            };
            self.line_no += 1;

            let Some(filename) = line.split_whitespace().next_back() else {
                continue;
            };

            return match self.parse_entry(filename) {
                Ok(record) => Some(Ok(self.transformer.process(record, &self.source_name))),
                Err(e) => {
                    debug!("{}: line {}: {}", self.source_name, self.line_no, e);
                    self.finish();
                    Some(Err(e))
                }
            };
        }
    }
}
