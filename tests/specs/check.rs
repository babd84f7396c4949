//! Behavioral specs for checking a decoded capture.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Verdicts
// =============================================================================

/// A capture with the whole handshake passes with OK on stderr
#[test]
fn complete_handshake_passes() {
    check_fixture("dhe-complete")
        .success()
        .stdout("")
        .stderr(predicates::str::diff(format!("{PROGRESS}OK\n")));
}

/// A capture cut off before Server Hello Done fails at pattern #16
#[test]
fn truncated_handshake_fails_at_server_hello_done() {
    check_fixture("dhe-truncated").code(1).stderr(predicates::str::diff(format!(
        "{PROGRESS}Did not match pattern #16: \
         TLSv1.2 Record Layer: Handshake Protocol: Server Hello Done\nFAIL\n"
    )));
}

/// Later markers before the SYN do not satisfy the sequence
#[test]
fn out_of_order_capture_fails_at_first_pattern() {
    check_fixture("out-of-order").code(1).stderr(
        predicates::str::contains(
            r"Did not match pattern #0: Connection establish request \(SYN\): server port 44330",
        )
        .and(predicates::str::ends_with("FAIL\n")),
    );
}

/// An empty capture fails at pattern #0
#[test]
fn empty_capture_fails_at_first_pattern() {
    check_fixture("empty-trace")
        .code(1)
        .stderr(predicates::str::contains("Did not match pattern #0: "));
}

// =============================================================================
// Input selection and errors
// =============================================================================

/// A path argument overrides the default tshark.out
#[test]
fn explicit_path_is_checked() {
    tracecheck_cmd()
        .arg("--no-color")
        .arg(fixture("dhe-complete").join("tshark.out"))
        .assert()
        .success()
        .stderr(predicates::str::ends_with("OK\n"));
}

/// A missing capture is an input error, distinct from a match failure
#[test]
fn missing_capture_exits_with_input_error() {
    let dir = tempfile::TempDir::new().unwrap();
    tracecheck_cmd()
        .current_dir(dir.path())
        .arg("--no-color")
        .assert()
        .code(3)
        .stderr(
            predicates::str::contains("FAIL\n")
                .and(predicates::str::contains("error: cannot open tshark.out")),
        );
}

// =============================================================================
// Output formats
// =============================================================================

/// --output json writes a report to stdout and keeps stderr unchanged
#[test]
fn json_output_reports_failure_details() {
    let output = tracecheck_cmd()
        .current_dir(fixture("dhe-truncated"))
        .args(["--no-color", "--output", "json"])
        .output()
        .expect("command should run");
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["passed"], false);
    assert_eq!(json["group"], "Server Hello");
    assert_eq!(json["scan"]["index"], 16);
    assert!(String::from_utf8_lossy(&output.stderr).ends_with("FAIL\n"));
}

/// --list prints all 27 built-in patterns grouped by handshake phase
#[test]
fn list_prints_builtin_table() {
    let output = tracecheck_cmd()
        .current_dir(fixture("empty-trace"))
        .arg("--list")
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("New Session Ticket:"));
    assert!(stdout.contains("#26"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("  #")).count(), 27);
}

/// --verbose ends the progress line, then logs each matched pattern
#[test]
fn verbose_logs_matches() {
    tracecheck_cmd()
        .current_dir(fixture("dhe-complete"))
        .args(["--no-color", "--verbose"])
        .assert()
        .success()
        .stderr(
            predicates::str::starts_with(format!("{}\n", PROGRESS.trim_end()))
                .and(predicates::str::contains("matched pattern #0 at line 8"))
                .and(predicates::str::contains("matched pattern #26")),
        );
}
