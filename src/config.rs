// src/config.rs

//! Ingestion configuration
//!
//! # Example ingest.toml
//!
//! ```toml
//! [ingest]
//! rules = "rules.toml"
//! fail_fast = false
//!
//! [[source]]
//! name = "centos_8"
//! format = "rpm_ftp_list"
//! path = "lists/centos8.txt"
//!
//! [[source]]
//! name = "stackage_lts"
//! format = "stackage_html"
//! path = "lists/stackage.html"
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use crate::error::{Error, Result};
use crate::parsers::ListingFormat;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    ingest: IngestSettings,
    #[serde(default)]
    source: Vec<RawSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    name: String,
    format: String,
    path: PathBuf,
}

/// Run-wide settings from the `[ingest]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestSettings {
    /// Transformer rules file
    #[serde(default)]
    pub rules: Option<PathBuf>,

    /// Abort the whole run on the first failed source
    #[serde(default)]
    pub fail_fast: bool,
}

/// One upstream listing to ingest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub name: String,
    pub format: ListingFormat,
    pub path: PathBuf,
}

/// Parsed and validated ingestion configuration
#[derive(Debug, Clone, Default)]
pub struct IngestConfig {
    pub settings: IngestSettings,
    pub sources: Vec<SourceConfig>,
}

impl IngestConfig {
    /// Load a config file, resolving relative paths against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, Some(base_dir))
    }

    /// Parse a config string; relative paths are kept as is without `base_dir`
    pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;

        let resolve = |path: PathBuf| match base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        };

        let mut seen = HashSet::new();
        let mut sources = Vec::with_capacity(raw.source.len());
        for source in raw.source {
            if source.name.trim().is_empty() {
                return Err(Error::InvalidConfig("source with empty name".to_string()));
            }
            if !seen.insert(source.name.clone()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate source name '{}'",
                    source.name
                )));
            }
            sources.push(SourceConfig {
                format: ListingFormat::from_name(&source.format)?,
                path: resolve(source.path),
                name: source.name,
            });
        }

        let mut settings = raw.ingest;
        settings.rules = settings.rules.map(resolve);

        Ok(Self { settings, sources })
    }

    /// Look up a source by name
    pub fn source(&self, name: &str) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.name == name)
    }
}
