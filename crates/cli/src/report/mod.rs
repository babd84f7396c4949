// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan result reporting.
//!
//! Text output goes to stderr and is what test harnesses read alongside the
//! exit code. JSON output is an optional machine-readable copy on stdout.

mod json;
mod text;

pub use json::format_json;
pub use text::{write_listing, write_progress, write_verdict};

/// Progress line written before scanning starts.
pub const PROGRESS: &str = "Checking tshark output for correct Diffie-Hellman exchange... ";

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
