// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tracecheck::cli::Cli;
use tracecheck::config::defaults::LOG_ENV;
use tracecheck::error::{Error, ExitCode};

mod cmd_check;

fn main() -> process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_check::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("error: {}", e);
            e.downcast_ref::<Error>()
                .map(Error::exit_code)
                .unwrap_or(ExitCode::InternalError)
                .into()
        }
    }
}

/// Logs go to stderr. `TRACECHECK_LOG` takes a tracing filter directive;
/// `--verbose` forces debug output for this crate.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tracecheck=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
