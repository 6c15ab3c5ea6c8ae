// src/parsers/stackage.rs

//! Parser for Stackage snapshot pages
//!
//! A snapshot page lists packages in an HTML table:
//!
//! ```html
//! <div class="packages"><table><tbody>
//!   <tr><td><a href="/package/aeson-2.1.2.1">aeson-2.1.2.1</a></td>
//!       <td>Fast JSON parsing and encoding</td></tr>
//! </tbody></table></div>
//! ```
//!
//! The page is presentation HTML, so rows without a link in the first cell
//! are skipped rather than treated as errors.

use super::{ListingParser, ListingSource, RecordIter};
use crate::error::{Error, Result};
use crate::package::{PackageFactory, PackageRecord};
use crate::transformer::PackageTransformer;
use scraper::{ElementRef, Html, Selector};
use std::io::Read;
use tracing::debug;

const ROW_SELECTOR: &str = r#"div[class="packages"] > table > tbody > tr"#;

#[derive(Debug, Clone)]
pub struct StackageHtmlParser {
    rows: Selector,
}

impl StackageHtmlParser {
    pub fn new() -> Result<Self> {
        let rows = Selector::parse(ROW_SELECTOR)
            .map_err(|_| Error::InvalidSelector(ROW_SELECTOR.to_string()))?;
        Ok(Self { rows })
    }

    /// Pull the raw cell texts out of every data row
    fn extract_rows(&self, document: &Html) -> Vec<PackageRow> {
        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for row in document.select(&self.rows) {
            match PackageRow::from_element(row) {
                Some(parsed) => rows.push(parsed),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} table rows without a package link", skipped);
        }
        rows
    }
}

/// Cell contents of one table row
#[derive(Debug)]
struct PackageRow {
    name_version: String,
    summary: String,
}

impl PackageRow {
    fn from_element(row: ElementRef<'_>) -> Option<Self> {
        let mut cells = child_elements(row, "td");

        let link = child_elements(cells.next()?, "a").next()?;
        let name_version = leading_text(link)?;

        let summary = cells
            .next()
            .and_then(leading_text)
            .unwrap_or_default()
            .replace('\n', " ");

        Some(Self {
            name_version,
            summary,
        })
    }
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

/// Text before the element's first child element
fn leading_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .next()
        .and_then(|node| node.value().as_text())
        .map(|text| String::from(&**text))
}

impl ListingParser for StackageHtmlParser {
    fn iter_parse<'a>(
        &self,
        source: ListingSource,
        factory: &'a dyn PackageFactory,
        transformer: &'a dyn PackageTransformer,
    ) -> Result<RecordIter<'a>> {
        let (source_name, mut reader) = source.into_parts();
        debug!("Parsing Stackage HTML for {}", source_name);

        let mut html = String::new();
        reader.read_to_string(&mut html)?;
        drop(reader);

        let document = Html::parse_document(&html);
        let rows = self.extract_rows(&document);
        debug!("Found {} package rows for {}", rows.len(), source_name);

        Ok(Box::new(StackageRecords {
            source_name,
            rows: rows.into_iter(),
            failed: false,
            factory,
            transformer,
        }))
    }
}

struct StackageRecords<'a> {
    source_name: String,
    rows: std::vec::IntoIter<PackageRow>,
    failed: bool,
    factory: &'a dyn PackageFactory,
    transformer: &'a dyn PackageTransformer,
}

impl StackageRecords<'_> {
    fn build(&self, row: PackageRow) -> Result<PackageRecord> {
        let mut pkg = self.factory.begin();
        pkg.set_name_and_version(&row.name_version)?;
        pkg.set_summary(&row.summary);
        pkg.finalize()
    }
}

impl Iterator for StackageRecords<'_> {
    type Item = Result<PackageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let row = self.rows.next()?;
        match self.build(row) {
            Ok(record) => Some(Ok(self.transformer.process(record, &self.source_name))),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
