// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::path::Path;

use serde_json::json;

use crate::scanner::ScanResult;
use crate::sequence::PatternSequence;

/// Format a scan result as a JSON document.
pub fn format_json(
    input: &Path,
    sequence: &PatternSequence,
    result: &ScanResult,
) -> anyhow::Result<String> {
    let mut output = serde_json::Map::new();
    output.insert("input".to_string(), json!(input.display().to_string()));
    output.insert("passed".to_string(), json!(result.is_success()));
    output.insert("patterns".to_string(), json!(sequence.len()));
    output.insert("scan".to_string(), serde_json::to_value(result)?);

    if let ScanResult::Failure { index, .. } = result
        && let Some(group) = sequence.get(*index).and_then(|p| p.group.as_deref())
    {
        output.insert("group".to_string(), json!(group));
    }

    Ok(serde_json::to_string_pretty(&output)?)
}
