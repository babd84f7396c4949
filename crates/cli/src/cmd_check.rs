// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: scan one trace file and report the verdict.

use std::io::Write;

use termcolor::StandardStream;

use tracecheck::cli::{Cli, OutputFormat};
use tracecheck::color::resolve_color;
use tracecheck::config::{self, Config};
use tracecheck::error::ExitCode;
use tracecheck::report;
use tracecheck::scanner;

/// Run the check described by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    let sequence = config.sequence()?;

    if cli.list {
        let mut stdout = std::io::stdout().lock();
        report::write_listing(&mut stdout, &sequence)?;
        stdout.flush()?;
        return Ok(ExitCode::Passed);
    }

    let input = config.input_path(cli.input.as_deref());
    let mut stderr = StandardStream::stderr(resolve_color(cli.color, cli.no_color));

    report::write_progress(&mut stderr, cli.verbose)?;
    let result = match scanner::scan_file(&sequence, &input) {
        Ok(result) => result,
        Err(e) => {
            writeln!(stderr, "FAIL")?;
            return Err(e.into());
        }
    };
    tracing::debug!("read {} lines from {}", result.lines_read(), input.display());
    report::write_verdict(&mut stderr, &result)?;

    if cli.output == OutputFormat::Json {
        let json = report::format_json(&input, &sequence, &result)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
    }

    Ok(if result.is_success() {
        ExitCode::Passed
    } else {
        ExitCode::Failed
    })
}
