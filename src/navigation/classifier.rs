// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Filtering raw detections into navigation-relevant obstacles

use serde::{Deserialize, Serialize};

use crate::navigation::hints::hint_for;
use crate::navigation::vocabulary::ObstacleVocabulary;
use crate::vision::detection::{BBox, Detection};

/// A detection judged navigation-relevant, enriched with a spoken hint.
///
/// Only the classifier constructs these; label, confidence and bbox are
/// carried over verbatim from the source detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub label: String,
    pub confidence: f32,
    pub bbox: BBox,
    pub hint: String,
}

/// Stable filter over a detection sequence.
#[derive(Debug, Clone, Default)]
pub struct ObstacleClassifier {
    vocabulary: ObstacleVocabulary,
}

impl ObstacleClassifier {
    pub fn new(vocabulary: ObstacleVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Keep the detections the vocabulary deems relevant, in input order,
    /// attaching a spoken hint to each. No reordering, no dedup; an empty
    /// input yields an empty output.
    pub fn classify(&self, detections: &[Detection]) -> Vec<Obstacle> {
        detections
            .iter()
            .filter(|d| self.vocabulary.is_relevant(&d.label.to_lowercase()))
            .map(|d| Obstacle {
                label: d.label.clone(),
                confidence: d.confidence,
                bbox: d.bbox.clone(),
                hint: hint_for(&d.label),
            })
            .collect()
    }
}
