//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing tracecheck CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// Progress prefix written before every scan.
pub const PROGRESS: &str = "Checking tshark output for correct Diffie-Hellman exchange... ";

/// Returns a Command configured to run the tracecheck binary with a clean
/// environment for the variables it reads.
pub fn tracecheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tracecheck"));
    cmd.env_remove("TRACECHECK_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Runs tracecheck with no arguments inside the named fixture.
pub fn check_fixture(name: &str) -> assert_cmd::assert::Assert {
    tracecheck_cmd()
        .current_dir(fixture(name))
        .arg("--no-color")
        .assert()
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
