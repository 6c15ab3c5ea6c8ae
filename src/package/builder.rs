// src/package/builder.rs

//! Builder accumulating the fields of one package record

use super::PackageRecord;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Mutable builder for exactly one in-progress record
///
/// Values are trimmed on the way in; a value that trims to nothing leaves the
/// field unset. `finalize` consumes the builder, so a builder cannot be
/// reused for a second record.
///
/// Name and version come either from `set_name`/`set_version` or from one
/// `set_name_and_version` token, never both. Mixing the two is reported by
/// `set_name_and_version` when it comes second and by `finalize` otherwise.
#[derive(Debug, Default)]
pub struct PackageMaker {
    name: Option<String>,
    version: Option<String>,
    /// First separate setter used, if any
    separate: Option<&'static str>,
    combined: bool,
    conflict: Option<&'static str>,
    raw_version: Option<String>,
    summary: Option<String>,
    extra_fields: BTreeMap<String, String>,
}

impl PackageMaker {
    /// Start a new, empty record
    pub fn begin() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.mark_separate("set_name");
        self.name = normalized(name.as_ref());
    }

    pub fn set_version(&mut self, version: impl AsRef<str>) {
        self.mark_separate("set_version");
        self.version = normalized(version.as_ref());
    }

    fn mark_separate(&mut self, setter: &'static str) {
        if self.combined && self.conflict.is_none() {
            self.conflict = Some(setter);
        }
        self.separate.get_or_insert(setter);
    }

    /// Set name and version from a token like `name-version`
    ///
    /// The last `-` separates the version; the name keeps any other hyphens.
    pub fn set_name_and_version(&mut self, token: &str) -> Result<()> {
        self.set_name_and_version_with(token, '-')
    }

    /// Like [`set_name_and_version`](Self::set_name_and_version) for formats
    /// joining name and version with another separator
    pub fn set_name_and_version_with(&mut self, token: &str, separator: char) -> Result<()> {
        if let Some(setter) = self.separate {
            return Err(Error::ConflictingSetters(setter));
        }
        let token = token.trim();
        let (name, version) = token
            .rsplit_once(separator)
            .filter(|(name, version)| !name.trim().is_empty() && !version.trim().is_empty())
            .ok_or_else(|| Error::AmbiguousSplit(token.to_string()))?;

        self.name = normalized(name);
        self.version = normalized(version);
        self.combined = true;
        Ok(())
    }

    pub fn set_rawversion(&mut self, raw_version: impl AsRef<str>) {
        self.raw_version = normalized(raw_version.as_ref());
    }

    pub fn set_summary(&mut self, summary: impl AsRef<str>) {
        self.summary = normalized(summary.as_ref());
    }

    /// Attach format-specific metadata; each key may be set once per record
    pub fn set_extra_field(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        match self.extra_fields.entry(key.to_string()) {
            Entry::Occupied(_) => Err(Error::DuplicateKey(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                Ok(())
            }
        }
    }

    /// Freeze into a record, failing if `name` or `version` was never set
    pub fn finalize(self) -> Result<PackageRecord> {
        if let Some(setter) = self.conflict {
            return Err(Error::ConflictingSetters(setter));
        }
        let name = self.name.ok_or(Error::IncompleteRecord("name"))?;
        let version = self.version.ok_or(Error::IncompleteRecord("version"))?;

        Ok(PackageRecord {
            name,
            version,
            raw_version: self.raw_version,
            summary: self.summary,
            extra_fields: self.extra_fields,
        })
    }
}

fn normalized(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
