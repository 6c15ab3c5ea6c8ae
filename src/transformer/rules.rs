// src/transformer/rules.rs

//! Rule-file driven transformer
//!
//! # Example rules.toml
//!
//! ```toml
//! # Strip the interpreter prefix from Python module packages
//! [[rule]]
//! namepat = "python3?-(.+)"
//! setname = "$1"
//!
//! # Fix a misnamed package on one source only, then stop
//! [[rule]]
//! name = ["gtk2", "gtk+2"]
//! source = "centos_8"
//! setname = "gtk"
//! last = true
//!
//! [[rule]]
//! verpat = ".*(alpha|beta|rc).*"
//! warning = "prerelease version"
//! extra = { prerelease = "yes" }
//! ```

use super::PackageTransformer;
use crate::error::{Error, Result};
use crate::package::PackageRecord;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// One or more exact names
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NameMatch {
    One(String),
    Many(Vec<String>),
}

impl NameMatch {
    fn contains(&self, name: &str) -> bool {
        match self {
            NameMatch::One(n) => n == name,
            NameMatch::Many(names) => names.iter().any(|n| n == name),
        }
    }
}

/// A rule as written in the rules file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    /// Exact name(s) to match
    #[serde(default)]
    pub name: Option<NameMatch>,

    /// Regex the whole name must match; its captures feed `setname`
    #[serde(default)]
    pub namepat: Option<String>,

    /// Regex the whole version must match
    #[serde(default)]
    pub verpat: Option<String>,

    /// Only apply to records from this listing source
    #[serde(default)]
    pub source: Option<String>,

    /// Replacement name, `$1`-style references expand `namepat` captures
    #[serde(default)]
    pub setname: Option<String>,

    /// Replacement version
    #[serde(default)]
    pub setver: Option<String>,

    /// Extra fields to add or overwrite
    #[serde(default)]
    pub extra: BTreeMap<String, String>,

    /// Log a warning for every matching record
    #[serde(default)]
    pub warning: Option<String>,

    /// Stop evaluating further rules after this one matches
    #[serde(default)]
    pub last: bool,
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    rule: Vec<RuleSpec>,
}

#[derive(Debug)]
struct Rule {
    spec: RuleSpec,
    namepat: Option<Regex>,
    verpat: Option<Regex>,
}

impl Rule {
    fn compile(index: usize, spec: RuleSpec) -> Result<Self> {
        let has_action = spec.setname.is_some()
            || spec.setver.is_some()
            || !spec.extra.is_empty()
            || spec.warning.is_some()
            || spec.last;
        if !has_action {
            return Err(Error::InvalidRule(format!("rule #{} has no action", index + 1)));
        }
        for (key, value) in [("setname", &spec.setname), ("setver", &spec.setver)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::InvalidRule(format!(
                    "rule #{} has an empty {}",
                    index + 1,
                    key
                )));
            }
        }

        let namepat = spec.namepat.as_deref().map(anchored).transpose()?;
        let verpat = spec.verpat.as_deref().map(anchored).transpose()?;

        Ok(Self {
            spec,
            namepat,
            verpat,
        })
    }

    fn matches(&self, record: &PackageRecord, source: &str) -> bool {
        if let Some(wanted) = &self.spec.source {
            if wanted != source {
                return false;
            }
        }
        if let Some(names) = &self.spec.name {
            if !names.contains(&record.name) {
                return false;
            }
        }
        if let Some(re) = &self.namepat {
            if !re.is_match(&record.name) {
                return false;
            }
        }
        if let Some(re) = &self.verpat {
            if !re.is_match(&record.version) {
                return false;
            }
        }
        true
    }

    fn apply(&self, record: &mut PackageRecord, source: &str) {
        if let Some(warning) = &self.spec.warning {
            warn!(
                "{}: {} {} ({})",
                source, record.name, record.version, warning
            );
        }

        if let Some(setname) = &self.spec.setname {
            let new_name = match self.namepat.as_ref().and_then(|re| re.captures(&record.name)) {
                Some(caps) => {
                    let mut expanded = String::new();
                    caps.expand(setname, &mut expanded);
                    expanded
                }
                None => setname.clone(),
            };
            let new_name = new_name.trim();
            if new_name.is_empty() {
                warn!(
                    "{}: rename of {} expands to an empty name, keeping it",
                    source, record.name
                );
            } else {
                debug!("Renaming {} to {}", record.name, new_name);
                record.name = new_name.to_string();
            }
        }

        if let Some(setver) = &self.spec.setver {
            record.version = setver.trim().to_string();
        }

        for (key, value) in &self.spec.extra {
            record.extra_fields.insert(key.clone(), value.clone());
        }
    }
}

/// Anchor a pattern so it must match the whole value
fn anchored(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^(?:{})$", pattern))?)
}

/// Ordered rule list applied to every record
#[derive(Debug, Default)]
pub struct RuleTransformer {
    rules: Vec<Rule>,
}

impl RuleTransformer {
    pub fn new(specs: Vec<RuleSpec>) -> Result<Self> {
        let rules = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Rule::compile(index, spec))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Parse rules from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RuleFile = toml::from_str(content)?;
        Self::new(file.rule)
    }

    /// Load rules from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let transformer = Self::from_toml_str(&content)?;
        debug!(
            "Loaded {} transformer rules from {}",
            transformer.len(),
            path.display()
        );
        Ok(transformer)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl PackageTransformer for RuleTransformer {
    fn process(&self, mut record: PackageRecord, source: &str) -> PackageRecord {
        for rule in &self.rules {
            if !rule.matches(&record, source) {
                continue;
            }
            rule.apply(&mut record, source);
            if rule.spec.last {
                break;
            }
        }
        record
    }
}
