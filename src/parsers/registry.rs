// src/parsers/registry.rs

//! Listing format registry
//!
//! Maps format names used in configuration and on the command line to
//! parser implementations.

use super::{ListingParser, RpmFtpListParser, StackageHtmlParser};
use crate::error::{Error, Result};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Supported listing formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ListingFormat {
    /// Plain text list of RPM file names
    RpmFtpList,
    /// Stackage snapshot HTML page
    StackageHtml,
}

impl ListingFormat {
    /// Resolve a format by name
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| Error::UnknownFormat(name.to_string()))
    }

    /// All registered format names
    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::RpmFtpList => "plain text list of RPM file names",
            Self::StackageHtml => "Stackage snapshot HTML table",
        }
    }
}

/// Create a parser for the given format
pub fn create_parser(format: ListingFormat) -> Result<Box<dyn ListingParser>> {
    match format {
        ListingFormat::RpmFtpList => Ok(Box::new(RpmFtpListParser::new())),
        ListingFormat::StackageHtml => Ok(Box::new(StackageHtmlParser::new()?)),
    }
}
