// src/commands/mod.rs
//! Command handlers for the repo-ingest CLI

mod ingest;
mod nevra;
mod parse;

pub use ingest::cmd_ingest;
pub use nevra::{cmd_formats, cmd_nevra};
pub use parse::cmd_parse;

use anyhow::Result;
use repo_ingest::PackageRecord;
use serde_json::Value;
use std::io::Write;

/// Print one record as a JSON line (or pretty block)
fn print_record(record: &PackageRecord, source: &str, pretty: bool) -> Result<()> {
    write_record(&mut std::io::stdout().lock(), record, source, pretty)
}

fn write_record(
    out: &mut impl Write,
    record: &PackageRecord,
    source: &str,
    pretty: bool,
) -> Result<()> {
    let json: Value = record.to_api_json(source);
    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    writeln!(out, "{}", text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record() -> PackageRecord {
        PackageRecord {
            name: "foo".to_string(),
            version: "1.0".to_string(),
            raw_version: None,
            summary: None,
            extra_fields: BTreeMap::new(),
        }
    }

    #[test]
    fn test_write_record_json_line() {
        let mut out = Vec::new();
        write_record(&mut out, &record(), "centos_9", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"name\":\"foo\",\"repo\":\"centos_9\",\"version\":\"1.0\"}\n"
        );
    }

    #[test]
    fn test_write_record_closed_pipe_is_error() {
        let err = write_record(&mut ClosedPipe, &record(), "centos_9", false).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
