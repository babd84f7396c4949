// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! A pattern that never shows up in the trace is not an error: it is a
//! normal [`ScanResult::Failure`](crate::scanner::ScanResult). The variants
//! here cover the environment being unusable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pattern::PatternError;

/// Errors that stop a check before it can produce a verdict.
#[derive(Debug, Error)]
pub enum Error {
    /// The trace-dissection file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through the trace.
    #[error("failed reading {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A configured pattern is not a valid regex.
    #[error("pattern #{index}: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: PatternError,
    },

    /// The config file could not be read or parsed.
    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Exit code the process should terminate with for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::InvalidPattern { .. } | Error::Config { .. } => ExitCode::ConfigError,
            Error::InputUnavailable { .. } | Error::Read { .. } => ExitCode::InputError,
        }
    }
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every pattern matched in order.
    Passed = 0,
    /// A pattern was not found before the trace ended.
    Failed = 1,
    /// Config file or pattern table is invalid.
    ConfigError = 2,
    /// Trace file missing or unreadable.
    InputError = 3,
    /// Anything else (e.g. stdout closed while reporting).
    InternalError = 4,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
