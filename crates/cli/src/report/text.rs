// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::scanner::ScanResult;
use crate::sequence::PatternSequence;

use super::PROGRESS;

/// Write the progress prefix.
///
/// The verdict normally continues the same line. With `line_break`, the line
/// is ended here so scan logs start on their own line.
pub fn write_progress<W: Write>(w: &mut W, line_break: bool) -> io::Result<()> {
    if line_break {
        writeln!(w, "{}", PROGRESS.trim_end())?;
    } else {
        write!(w, "{}", PROGRESS)?;
    }
    w.flush()
}

/// Write the verdict for `result`.
///
/// Failure writes the unmatched pattern on its own line, then `FAIL`.
pub fn write_verdict<W: WriteColor>(w: &mut W, result: &ScanResult) -> io::Result<()> {
    match result {
        ScanResult::Success { .. } => {
            w.set_color(&scheme::pass())?;
            write!(w, "OK")?;
            w.reset()?;
            writeln!(w)?;
        }
        ScanResult::Failure { index, pattern, .. } => {
            write!(w, "Did not match pattern ")?;
            w.set_color(&scheme::index())?;
            write!(w, "#{}", index)?;
            w.reset()?;
            writeln!(w, ": {}", pattern)?;
            w.set_color(&scheme::fail())?;
            write!(w, "FAIL")?;
            w.reset()?;
            writeln!(w)?;
        }
    }
    w.flush()
}

/// Write the pattern table, one pattern per line, for `--list`.
pub fn write_listing<W: Write>(w: &mut W, sequence: &PatternSequence) -> io::Result<()> {
    let mut last_group: Option<&str> = None;
    for pattern in sequence {
        let group = pattern.group.as_deref();
        if group.is_some() && group != last_group {
            writeln!(w, "{}:", group.unwrap_or_default())?;
        }
        last_group = group;
        writeln!(w, "  #{:<3} {}", pattern.index, pattern.source)?;
    }
    Ok(())
}
