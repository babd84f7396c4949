// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, forward-only pattern scanner.
//!
//! Reads a line stream once. Each line is tested against the current target
//! pattern only; on a match the target moves to the next pattern in the
//! sequence. A line is never revisited, so two positions in the sequence
//! can never be satisfied by the same line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::error::Error;
use crate::sequence::PatternSequence;

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ScanResult {
    /// All patterns matched in order.
    Success {
        lines_read: usize,
        /// 1-based line number where each pattern matched, in sequence order.
        matched_lines: Vec<usize>,
    },
    /// The stream ended while still looking for `index`.
    Failure {
        index: usize,
        pattern: String,
        lines_read: usize,
    },
}

impl ScanResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ScanResult::Success { .. })
    }

    pub fn lines_read(&self) -> usize {
        match self {
            ScanResult::Success { lines_read, .. } | ScanResult::Failure { lines_read, .. } => {
                *lines_read
            }
        }
    }
}

/// A line could not be read from the stream.
#[derive(Debug, Error)]
#[error("line {line}: {source}")]
pub struct ReadError {
    /// 1-based number of the line that failed.
    pub line: usize,
    #[source]
    pub source: io::Error,
}

/// Scan position: which pattern is being looked for, and how far into the
/// stream we are.
struct Cursor<'s> {
    sequence: &'s PatternSequence,
    index: usize,
    lines_read: usize,
    matched_lines: Vec<usize>,
}

impl<'s> Cursor<'s> {
    fn new(sequence: &'s PatternSequence) -> Self {
        Self {
            sequence,
            index: 0,
            lines_read: 0,
            matched_lines: Vec::with_capacity(sequence.len()),
        }
    }

    fn is_done(&self) -> bool {
        self.index >= self.sequence.len()
    }

    /// Consume one line. Returns true once every pattern has matched.
    fn advance(&mut self, line: &str) -> bool {
        self.lines_read += 1;
        let Some(pattern) = self.sequence.get(self.index) else {
            return true;
        };
        if pattern.is_match(line) {
            tracing::debug!(
                "matched pattern #{} at line {}: {}",
                pattern.index,
                self.lines_read,
                pattern.source
            );
            self.matched_lines.push(self.lines_read);
            self.index += 1;
        }
        self.is_done()
    }

    fn finish(self) -> ScanResult {
        match self.sequence.get(self.index) {
            None => ScanResult::Success {
                lines_read: self.lines_read,
                matched_lines: self.matched_lines,
            },
            Some(pattern) => {
                tracing::debug!(
                    "stream ended after {} lines while looking for pattern #{}",
                    self.lines_read,
                    pattern.index
                );
                ScanResult::Failure {
                    index: pattern.index,
                    pattern: pattern.source.clone(),
                    lines_read: self.lines_read,
                }
            }
        }
    }
}

/// Scan `lines` for `sequence` in order.
///
/// Stops reading as soon as the last pattern matches. An empty sequence
/// succeeds without reading anything.
pub fn scan_lines<I>(sequence: &PatternSequence, lines: I) -> Result<ScanResult, ReadError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut cursor = Cursor::new(sequence);
    if cursor.is_done() {
        return Ok(cursor.finish());
    }
    for line in lines {
        let line = line.map_err(|source| ReadError {
            line: cursor.lines_read + 1,
            source,
        })?;
        if cursor.advance(&line) {
            break;
        }
    }
    Ok(cursor.finish())
}

/// Scan a buffered reader line by line.
pub fn scan<R: BufRead>(sequence: &PatternSequence, reader: R) -> Result<ScanResult, ReadError> {
    scan_lines(sequence, reader.lines())
}

/// Open `path` and scan it. The file is closed when this returns.
pub fn scan_file(sequence: &PatternSequence, path: &Path) -> crate::error::Result<ScanResult> {
    let file = File::open(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("scanning {} for {} patterns", path.display(), sequence.len());
    scan(sequence, BufReader::new(file)).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        line: e.line,
        source: e.source,
    })
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
