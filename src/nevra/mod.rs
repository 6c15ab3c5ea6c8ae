// src/nevra/mod.rs

//! NEVRA decomposition and reconstruction for RPM-style artifact names
//!
//! An RPM file name has the shape `name-[epoch:]version-release.arch.rpm`.
//! Names may contain hyphens and versions may contain dots, so decomposition
//! anchors on the right edge: the last dot separates the architecture, and
//! the two hyphens nearest the right edge separate version and release.
//!
//! Examples:
//! - "bash-5.2.26-3.fc40.x86_64" → name="bash", version="5.2.26", release="3.fc40"
//! - "perl-Net-SSLeay-1:1.94-3.noarch" → name="perl-Net-SSLeay", epoch=1
//! - "1:perl-Net-SSLeay-1.94-3.noarch" → same as above, leading epoch form

use crate::error::{Error, Result};
use std::fmt::{self, Write};

/// Package-type suffixes removed from file names before decomposition
const PACKAGE_SUFFIXES: &[&str] = &[".rpm"];

/// A decomposed artifact identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nevra {
    pub name: String,
    /// `None` means the identifier carried no epoch, which is not the same as epoch 0
    pub epoch: Option<u64>,
    pub version: String,
    pub release: String,
    pub arch: String,
}

impl Nevra {
    /// Decompose an identifier with its package-type suffix already removed
    ///
    /// Format: `[epoch:]name-[epoch:]version-release.arch`
    pub fn parse(identifier: &str) -> Result<Self> {
        let (nevr, arch) = identifier
            .rsplit_once('.')
            .ok_or_else(|| Error::malformed(identifier, "missing '.arch' suffix"))?;
        if arch.is_empty() || arch.contains(['-', ':']) {
            return Err(Error::malformed(identifier, "invalid architecture"));
        }

        let (rest, release) = nevr
            .rsplit_once('-')
            .ok_or_else(|| Error::malformed(identifier, "missing release segment"))?;
        let (name, version) = rest
            .rsplit_once('-')
            .ok_or_else(|| Error::malformed(identifier, "missing version segment"))?;

        if release.is_empty() || release.contains(':') {
            return Err(Error::malformed(identifier, "invalid release"));
        }

        let (version_epoch, version) = split_epoch(identifier, version)?;
        let (name_epoch, name) = split_epoch(identifier, name)?;

        let epoch = match (name_epoch, version_epoch) {
            (Some(_), Some(_)) => {
                return Err(Error::malformed(identifier, "epoch given twice"));
            }
            (e1, e2) => e1.or(e2),
        };

        // At most one epoch prefix per segment
        if name.contains(':') || version.contains(':') {
            return Err(Error::malformed(identifier, "stray ':' after epoch"));
        }
        if name.is_empty() {
            return Err(Error::malformed(identifier, "empty name"));
        }
        if version.is_empty() {
            return Err(Error::malformed(identifier, "empty version"));
        }

        Ok(Self {
            name: name.to_string(),
            epoch,
            version: version.to_string(),
            release: release.to_string(),
            arch: arch.to_string(),
        })
    }

    /// Displayable version: `[epoch:]version-release`
    pub fn raw_version(&self) -> String {
        raw_version(self.epoch, &self.version, Some(&self.release))
    }
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&construct(
            Some(&self.name),
            self.epoch,
            &self.version,
            Some(&self.release),
            Some(&self.arch),
        ))
    }
}

impl std::str::FromStr for Nevra {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Nevra::parse(s)
    }
}

/// Split an optional `epoch:` prefix off a segment
fn split_epoch<'a>(identifier: &str, segment: &'a str) -> Result<(Option<u64>, &'a str)> {
    let Some((epoch, rest)) = segment.split_once(':') else {
        return Ok((None, segment));
    };

    if epoch.is_empty() || !epoch.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(
            identifier,
            format!("epoch '{}' is not a non-negative integer", epoch),
        ));
    }

    let epoch = epoch
        .parse::<u64>()
        .map_err(|e| Error::malformed(identifier, format!("invalid epoch: {}", e)))?;

    Ok((Some(epoch), rest))
}

/// Remove a trailing package-type suffix such as `.rpm`
pub fn strip_package_suffix(filename: &str) -> &str {
    PACKAGE_SUFFIXES
        .iter()
        .find_map(|suffix| filename.strip_suffix(suffix))
        .unwrap_or(filename)
}

/// Build an identifier from any subset of NEVRA fields
///
/// Produces `[name-][epoch:]version[-release][.arch]`.
pub fn construct(
    name: Option<&str>,
    epoch: Option<u64>,
    version: &str,
    release: Option<&str>,
    arch: Option<&str>,
) -> String {
    let mut out = String::new();

    if let Some(name) = name {
        out.push_str(name);
        out.push('-');
    }
    if let Some(epoch) = epoch {
        // Writing to a String cannot fail
        let _ = write!(out, "{}:", epoch);
    }
    out.push_str(version);
    if let Some(release) = release {
        out.push('-');
        out.push_str(release);
    }
    if let Some(arch) = arch {
        out.push('.');
        out.push_str(arch);
    }

    out
}

/// Canonical raw version: `[epoch:]version-release`, or `version` without a release
///
/// The architecture is a separate record concern and never part of the version.
pub fn raw_version(epoch: Option<u64>, version: &str, release: Option<&str>) -> String {
    construct(None, epoch, version, release, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let n = Nevra::parse("bash-5.2.26-3.fc40.x86_64").unwrap();
        assert_eq!(n.name, "bash");
        assert_eq!(n.epoch, None);
        assert_eq!(n.version, "5.2.26");
        assert_eq!(n.release, "3.fc40");
        assert_eq!(n.arch, "x86_64");
    }

    #[test]
    fn test_parse_epoch_in_version() {
        let n = Nevra::parse("pkg-1:2.0-3.x86_64").unwrap();
        assert_eq!(n.name, "pkg");
        assert_eq!(n.epoch, Some(1));
        assert_eq!(n.version, "2.0");
        assert_eq!(n.release, "3");
        assert_eq!(n.arch, "x86_64");
    }

    #[test]
    fn test_parse_without_epoch_is_unspecified() {
        let n = Nevra::parse("pkg-2.0-3.x86_64").unwrap();
        assert_eq!(n.epoch, None);
    }

    #[test]
    fn test_parse_zero_epoch_is_kept() {
        let n = Nevra::parse("pkg-0:2.0-3.x86_64").unwrap();
        assert_eq!(n.epoch, Some(0));
        assert_eq!(n.raw_version(), "0:2.0-3");
    }

    #[test]
    fn test_parse_leading_epoch() {
        let n = Nevra::parse("2:pkg-2.0-3.x86_64").unwrap();
        assert_eq!(n.name, "pkg");
        assert_eq!(n.epoch, Some(2));
        assert_eq!(n.to_string(), "pkg-2:2.0-3.x86_64");
    }

    #[test]
    fn test_parse_hyphenated_name() {
        let n = Nevra::parse("lib-foo-bar-1.2.3-4.noarch").unwrap();
        assert_eq!(n.name, "lib-foo-bar");
        assert_eq!(n.version, "1.2.3");
        assert_eq!(n.release, "4");
        assert_eq!(n.arch, "noarch");
    }

    #[test]
    fn test_parse_source_package() {
        let n = Nevra::parse(strip_package_suffix("some-pkg-1.0-2.src.rpm")).unwrap();
        assert_eq!(n.name, "some-pkg");
        assert_eq!(n.release, "2");
        assert_eq!(n.arch, "src");
    }

    #[test]
    fn test_parse_malformed() {
        for bad in [
            "pkg.x86_64",
            "pkg-1.0.x86_64",
            "nodots",
            "-1.0-1.noarch",
            "pkg--1.noarch",
            "pkg-1.0-.noarch",
            "pkg-1.0-1.",
            "pkg-x:1.0-1.noarch",
            "pkg-:1.0-1.noarch",
            "1:pkg-2:1.0-1.noarch",
            "2:3:foo-1.0-1.x86_64",
            "foo-1:2:1.0-1.x86_64",
        ] {
            let err = Nevra::parse(bad).unwrap_err();
            assert!(
                matches!(err, Error::MalformedIdentifier { .. }),
                "expected MalformedIdentifier for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_raw_version() {
        assert_eq!(raw_version(None, "1.0", Some("2")), "1.0-2");
        assert_eq!(raw_version(Some(3), "1.0", Some("2")), "3:1.0-2");
        assert_eq!(raw_version(None, "1.0", None), "1.0");
        assert_eq!(raw_version(Some(1), "1.0", None), "1:1.0");
    }

    #[test]
    fn test_construct_full() {
        assert_eq!(
            construct(Some("foo"), Some(1), "2.0", Some("3"), Some("noarch")),
            "foo-1:2.0-3.noarch"
        );
        assert_eq!(construct(Some("foo"), None, "2.0", None, None), "foo-2.0");
    }

    #[test]
    fn test_display_roundtrip() {
        let n = Nevra::parse("python3-foo-bar-1:0.9.1-0.2.rc1.el9.aarch64").unwrap();
        let again: Nevra = n.to_string().parse().unwrap();
        assert_eq!(n, again);
    }

    #[test]
    fn test_strip_package_suffix() {
        assert_eq!(strip_package_suffix("a-1-1.noarch.rpm"), "a-1-1.noarch");
        assert_eq!(strip_package_suffix("a-1-1.noarch"), "a-1-1.noarch");
    }
}
