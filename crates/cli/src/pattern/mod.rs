// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-line pattern matching.
//!
//! Two strategies, chosen when a pattern is compiled:
//! - Plain literal: memchr::memmem
//! - Anything with regex metacharacters: regex crate
//!
//! Both search anywhere in the line; patterns are never anchored implicitly.

pub mod matcher;

pub use matcher::{CompiledPattern, PatternError};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
