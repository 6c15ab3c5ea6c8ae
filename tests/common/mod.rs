// tests/common/mod.rs

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A CentOS-style source RPM file list with `ls -l` columns.
pub const CENTOS_LIST: &str = "\
-rw-r--r--    1 ftp      ftp         52312 Jan 02 10:00 bash-5.1.8-9.el9.src.rpm
-rw-r--r--    1 ftp      ftp       1203312 Jan 02 10:00 perl-Net-SSLeay-1.92-2.el9.src.rpm

-rw-r--r--    1 ftp      ftp         80312 Jan 02 10:00 shadow-utils-2:4.9-8.el9.src.rpm
-rw-r--r--    1 ftp      ftp         10312 Jan 02 10:00 python-six-1.15.0-9.el9.src.rpm
";

/// A trimmed Stackage snapshot page.
pub const STACKAGE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>LTS 22.7</title></head>
<body>
<div class="packages">
<table>
<thead><tr><th>Package</th><th>Synopsis</th></tr></thead>
<tbody>
<tr><td><a href="/lts-22.7/package/aeson-2.1.2.1">aeson-2.1.2.1</a></td><td>Fast JSON parsing
and encoding</td></tr>
<tr><td colspan="2">Hidden packages</td></tr>
<tr><td><a href="/lts-22.7/package/base-compat-0.13.1">base-compat-0.13.1</a></td><td>A compatibility layer for base</td></tr>
<tr><td><a href="/lts-22.7/package/zlib-0.6.3.0">zlib-0.6.3.0</a></td></tr>
</tbody>
</table>
</div>
</body>
</html>
"#;

/// Write `content` to `name` inside a fresh temp dir.
///
/// Returns (TempDir, path) - keep the TempDir alive to prevent cleanup.
pub fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Write an additional file into an existing fixture dir.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
