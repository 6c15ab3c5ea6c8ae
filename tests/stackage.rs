// tests/stackage.rs

//! Stackage snapshot page parsing.

mod common;

use common::{STACKAGE_PAGE, write_fixture};
use repo_ingest::{
    DefaultFactory, ListingFormat, ListingSource, NoopTransformer, PackageRecord, create_parser,
};

fn parse_page(html: &str) -> Vec<PackageRecord> {
    let (_dir, path) = write_fixture("lts.html", html);
    let source = ListingSource::open("stackage_lts", &path).unwrap();
    let parser = create_parser(ListingFormat::StackageHtml).unwrap();

    parser
        .iter_parse(source, &DefaultFactory, &NoopTransformer)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_parse_snapshot_page() {
    let records = parse_page(STACKAGE_PAGE);
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].name, "aeson");
    assert_eq!(records[0].version, "2.1.2.1");
    assert_eq!(
        records[0].summary.as_deref(),
        Some("Fast JSON parsing and encoding")
    );

    assert_eq!(records[1].name, "base-compat");
    assert_eq!(records[1].version, "0.13.1");
    assert_eq!(
        records[1].summary.as_deref(),
        Some("A compatibility layer for base")
    );

    // Missing synopsis cell is an empty summary, not an error
    assert_eq!(records[2].name, "zlib");
    assert_eq!(records[2].summary, None);
}

#[test]
fn test_page_without_package_table() {
    let records = parse_page("<html><body><p>Snapshot not found</p></body></html>");
    assert!(records.is_empty());
}

#[test]
fn test_records_have_no_raw_version() {
    for record in parse_page(STACKAGE_PAGE) {
        assert_eq!(record.raw_version, None);
        assert_eq!(record.origversion(), None);
        assert!(record.extra_fields.is_empty());
    }
}
