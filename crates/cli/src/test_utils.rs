//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the tracecheck crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// A complete decoded capture of the DHE handshake.
pub const DHE_COMPLETE: &str = include_str!("../../../tests/fixtures/dhe-complete/tshark.out");

/// The same capture cut off just before Server Hello Done.
pub const DHE_TRUNCATED: &str = include_str!("../../../tests/fixtures/dhe-truncated/tshark.out");

/// Creates a temp directory with a tracecheck.toml holding `config`.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tracecheck.toml"), config).unwrap();
    dir
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a temp file with content using writeln! for each line.
pub fn temp_file_with_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}
