// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Composing obstacle hints and extracted text into one TTS-ready string

/// Spoken when an obstacle-only request finds nothing
pub const PATH_CLEAR: &str = "Path appears clear";

/// Spoken when a combined request finds neither obstacles nor text
pub const NOTHING_FOUND: &str = "No text or obstacles detected";

/// Obstacle-only speech: hints joined with `". "`, or the clear-path
/// sentinel when there are none.
pub fn compose_obstacles(hints: &[String]) -> String {
    if hints.is_empty() {
        PATH_CLEAR.to_string()
    } else {
        hints.join(". ")
    }
}

/// Combined speech for obstacles plus extracted text. Hints are joined
/// with `". "`; text is appended after a final separator only when it is
/// non-empty, so text with no hints keeps its leading `". "` separator.
/// Both empty yields the nothing-found sentinel.
pub fn compose_combined(hints: &[String], text: &str) -> String {
    match (hints.is_empty(), text.is_empty()) {
        (true, true) => NOTHING_FOUND.to_string(),
        (true, false) => format!(". {}", text),
        (false, true) => format!("{}.", hints.join(". ")),
        (false, false) => format!("{}. {}", hints.join(". "), text),
    }
}
