// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling for the OK/FAIL verdict.

use std::io::IsTerminal;

use clap::ValueEnum;
use termcolor::{Color, ColorChoice, ColorSpec};

/// `--color` argument values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stderr is a terminal and NO_COLOR is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice for stderr.
///
/// `--no-color` always wins over `--color`.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() || !std::io::stderr().is_terminal() {
                ColorChoice::Never
            } else {
                ColorChoice::Auto
            }
        }
    }
}

/// Color scheme for verdict output.
pub mod scheme {
    use super::*;

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Pattern index in failure messages.
    pub fn index() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
