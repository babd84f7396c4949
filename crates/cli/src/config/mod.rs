// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! A config file is only read when named with `-C`. Without one, tracecheck
//! checks `tshark.out` against the built-in DHE handshake table.
//!
//! ```toml
//! input = "captures/tshark.out"
//!
//! [[pattern]]
//! group = "TCP connection establishment"
//! regex = 'Connection establish request \(SYN\)'
//! ```

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::sequence::PatternSequence;

/// Parsed tracecheck.toml.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Trace file, relative to the config file's directory.
    pub input: Option<PathBuf>,

    /// Replaces the built-in table when present (even if empty).
    #[serde(rename = "pattern")]
    pub patterns: Option<Vec<PatternConfig>>,

    /// Directory the config was loaded from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// A single `[[pattern]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Label shown in `--list` output and JSON reports.
    pub group: Option<String>,
    /// Regex matched anywhere in a line.
    pub regex: String,
}

impl Config {
    /// Build the pattern sequence this config describes.
    pub fn sequence(&self) -> Result<PatternSequence> {
        match &self.patterns {
            None => PatternSequence::dhe_handshake(),
            Some(patterns) => PatternSequence::compile(
                patterns
                    .iter()
                    .map(|p| (p.group.as_deref(), p.regex.as_str())),
            ),
        }
    }

    /// Resolve the trace file to scan.
    ///
    /// An explicit CLI path wins and is used as given. Otherwise the
    /// configured `input` is resolved against the config's directory, and
    /// the default `tshark.out` is relative to the working directory.
    pub fn input_path(&self, cli_path: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_path {
            return path.to_path_buf();
        }
        match (&self.input, &self.base_dir) {
            (Some(input), Some(base)) => base.join(input),
            (Some(input), None) => input.clone(),
            (None, _) => PathBuf::from(defaults::INPUT),
        }
    }
}

/// Parse config from a TOML string.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut config = parse(&content, path)?;
    config.base_dir = path.parent().map(Path::to_path_buf);
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
