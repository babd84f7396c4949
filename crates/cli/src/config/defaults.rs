// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Trace-dissection file checked when neither the CLI nor config names one.
pub const INPUT: &str = "tshark.out";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "TRACECHECK_LOG";
