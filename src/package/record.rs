// src/package/record.rs

//! Canonical package record produced by every listing parser

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One listed artifact, normalized for cross-repository comparison
///
/// Parsers build records through [`PackageMaker::finalize`], which rejects a
/// missing `name` or `version`. The fields are public, so code constructing
/// or editing a record directly is responsible for keeping them non-empty.
///
/// [`PackageMaker::finalize`]: super::PackageMaker::finalize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    pub name: String,
    /// Normalized comparison version
    pub version: String,
    /// Fuller version (epoch, release) kept for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Format-specific metadata not covered by the fixed fields
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_fields: BTreeMap<String, String>,
}

impl PackageRecord {
    /// Raw version, only when it tells more than `version`
    pub fn origversion(&self) -> Option<&str> {
        self.raw_version
            .as_deref()
            .filter(|raw| *raw != self.version)
    }

    pub fn extra_field(&self, key: &str) -> Option<&str> {
        self.extra_fields.get(key).map(|s| s.as_str())
    }

    /// JSON view of the record as served by the project API
    ///
    /// Empty fields are omitted; `origversion` is present only when the raw
    /// version differs from the normalized one.
    pub fn to_api_json(&self, source: &str) -> Value {
        let mut output = Map::new();

        output.insert("repo".into(), Value::String(source.to_string()));
        output.insert("name".into(), Value::String(self.name.clone()));
        output.insert("version".into(), Value::String(self.version.clone()));

        if let Some(orig) = self.origversion() {
            output.insert("origversion".into(), Value::String(orig.to_string()));
        }
        if let Some(summary) = &self.summary {
            output.insert("summary".into(), Value::String(summary.clone()));
        }
        if !self.extra_fields.is_empty() {
            let extra = self
                .extra_fields
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            output.insert("extra".into(), Value::Object(extra));
        }

        Value::Object(output)
    }
}
