// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled line matchers.

use memchr::memmem;
use regex::Regex;
use thiserror::Error;

/// Characters that make a pattern source need the regex engine.
const REGEX_META: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$',
];

/// Error compiling a pattern source.
#[derive(Debug, Error)]
#[error("invalid pattern {source_text:?}: {error}")]
pub struct PatternError {
    pub source_text: String,
    #[source]
    pub error: regex::Error,
}

/// A pattern compiled for repeated matching against single lines.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Plain substring, searched with a precomputed memmem finder.
    Literal(memmem::Finder<'static>),
    /// Unanchored regular expression.
    Regex(Regex),
}

impl CompiledPattern {
    /// Compile a pattern source, picking the cheapest strategy that keeps
    /// regex search semantics.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        if is_literal(source) {
            return Ok(Self::Literal(
                memmem::Finder::new(source.as_bytes()).into_owned(),
            ));
        }
        Regex::new(source)
            .map(Self::Regex)
            .map_err(|error| PatternError {
                source_text: source.to_string(),
                error,
            })
    }

    /// True if the pattern occurs anywhere in `line`.
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Self::Literal(finder) => finder.find(line.as_bytes()).is_some(),
            Self::Regex(re) => re.is_match(line),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// True if `source` has no regex metacharacters, so a byte search is equivalent.
pub fn is_literal(source: &str) -> bool {
    !source.contains(REGEX_META)
}
