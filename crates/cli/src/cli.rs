//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::color::ColorMode;

/// Checks decoded tshark output for an ordered TCP + TLS Diffie-Hellman handshake
#[derive(Parser, Debug)]
#[command(name = "tracecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Trace-dissection file to check [default: tshark.out]
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Use specific config file instead of the built-in handshake table
    #[arg(short = 'C', long = "config")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print the pattern table and exit
    #[arg(long)]
    pub list: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Progress and verdict on stderr only
    #[default]
    Text,
    /// Also write a JSON report to stdout
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
