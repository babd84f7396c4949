// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered marker checks for decoded packet captures.
//!
//! tracecheck reads text produced by a packet decoder (tshark) and confirms
//! that a sequence of markers appears in order. The built-in sequence covers
//! a TCP handshake, a TLS 1.2 handshake with ephemeral Diffie-Hellman key
//! exchange, and at least one Application Data record.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod sequence;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ExitCode};
pub use scanner::{ScanResult, scan, scan_file};
pub use sequence::{Pattern, PatternSequence};
