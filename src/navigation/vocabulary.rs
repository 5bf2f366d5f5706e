// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Declarative obstacle-relevance policy
//!
//! The relevance rules are data, not control flow: a fixed allow-list of
//! labels plus a small set of substring rules that catch model-label
//! variants like "dining table" or "office chair". The table can be
//! replaced from a JSON file at startup but is immutable afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Built-in navigation-relevant labels (COCO-style detector vocabulary)
const DEFAULT_LABELS: &[&str] = &[
    "person",
    "chair",
    "couch",
    "table",
    "bottle",
    "cup",
    "car",
    "bicycle",
    "motorcycle",
    "bus",
    "truck",
    "stairs",
    "door",
    "tv",
    "laptop",
    "keyboard",
    "cell phone",
    "backpack",
    "umbrella",
    "handbag",
    "bench",
    "traffic light",
    "fire hydrant",
    "stop sign",
    "potted plant",
    "bed",
    "dining table",
    "toilet",
    "books",
    "clock",
    "vase",
];

/// Substring rules broadening the allow-list. Deliberately narrower than
/// the allow-list itself: "bench" is listed above but has no substring
/// rule, and that asymmetry is part of the shipped behavior.
const DEFAULT_SUBSTRINGS: &[&str] = &["person", "chair", "table", "stair", "door"];

fn default_substrings() -> Vec<String> {
    DEFAULT_SUBSTRINGS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid vocabulary file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which detector labels count as obstacles.
#[derive(Debug, Clone, Deserialize)]
pub struct ObstacleVocabulary {
    /// Exact-match allow-list (compared lowercased)
    labels: HashSet<String>,
    /// Substring rules applied to the lowercased label
    #[serde(default = "default_substrings")]
    substrings: Vec<String>,
}

impl Default for ObstacleVocabulary {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            substrings: default_substrings(),
        }
    }
}

impl ObstacleVocabulary {
    /// Load a vocabulary from a JSON file of the form
    /// `{"labels": [...], "substrings": [...]}` (substrings optional).
    /// Entries are normalized to lowercase.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let raw = std::fs::read_to_string(path)?;
        let parsed: Self = serde_json::from_str(&raw)?;
        Ok(Self {
            labels: parsed.labels.iter().map(|l| l.to_lowercase()).collect(),
            substrings: parsed.substrings.iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    /// Whether an already-lowercased label is navigation-relevant.
    pub fn is_relevant(&self, lowercased_label: &str) -> bool {
        self.labels.contains(lowercased_label)
            || self
                .substrings
                .iter()
                .any(|rule| lowercased_label.contains(rule.as_str()))
    }
}
