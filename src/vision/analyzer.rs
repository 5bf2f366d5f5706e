// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Scene analysis combining obstacle detection and text extraction

use std::sync::Arc;

use tracing::warn;

use crate::navigation::classifier::{Obstacle, ObstacleClassifier};
use crate::navigation::speech::{compose_combined, compose_obstacles};
use crate::vision::detection::{DetectError, Detection, DetectionBackend};
use crate::vision::ocr::{ExtractedText, TextExtractionPipeline};

/// Result of one analysis request; lives only for that request.
///
/// `hints[i]` is the spoken hint for `obstacles[i]`. `text` is present
/// only when text extraction was requested.
#[derive(Debug)]
pub struct AnalysisResult {
    pub text: Option<ExtractedText>,
    pub obstacles: Vec<Obstacle>,
    pub hints: Vec<String>,
    pub speech: String,
}

/// Composition of the detection capability, obstacle classifier and
/// text-extraction pipeline behind the service's analysis operations.
pub struct SceneAnalyzer {
    detector: Arc<dyn DetectionBackend>,
    classifier: ObstacleClassifier,
    ocr: TextExtractionPipeline,
}

impl SceneAnalyzer {
    pub fn new(
        detector: Arc<dyn DetectionBackend>,
        classifier: ObstacleClassifier,
        ocr: TextExtractionPipeline,
    ) -> Self {
        Self {
            detector,
            classifier,
            ocr,
        }
    }

    /// Raw detections, unfiltered (the `/detect` surface).
    pub async fn detect_raw(&self, image: &[u8]) -> Result<Vec<Detection>, DetectError> {
        self.detector.detect(image).await
    }

    /// Text extraction only (the `/ocr` surface).
    pub async fn extract_text(&self, image: &[u8]) -> ExtractedText {
        self.ocr.extract(image).await
    }

    /// Run the requested analysis branches and compose speech.
    ///
    /// The obstacle and text branches are independent and run
    /// concurrently; a failure in one never aborts the other. A failed
    /// detection backend degrades to an empty scene.
    pub async fn analyze(&self, image: &[u8], want_obstacles: bool, want_text: bool) -> AnalysisResult {
        let obstacle_branch = async {
            if !want_obstacles {
                return Vec::new();
            }
            match self.detector.detect(image).await {
                Ok(detections) => self.classifier.classify(&detections),
                Err(e) => {
                    warn!("detection backend failed, treating scene as empty: {}", e);
                    Vec::new()
                }
            }
        };

        let text_branch = async {
            if want_text {
                Some(self.ocr.extract(image).await)
            } else {
                None
            }
        };

        let (obstacles, text) = tokio::join!(obstacle_branch, text_branch);

        let hints: Vec<String> = obstacles.iter().map(|o| o.hint.clone()).collect();
        let speech = match &text {
            Some(extracted) => compose_combined(&hints, extracted.as_str()),
            None => compose_obstacles(&hints),
        };

        AnalysisResult {
            text,
            obstacles,
            hints,
            speech,
        }
    }
}
