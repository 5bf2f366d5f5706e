// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Tests for POST /detect

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use fabstir_vision_node::{
    api::{detect_handler, ImagePayload},
    navigation::{ObstacleClassifier, ObstacleVocabulary},
    vision::{
        DetectError, Detection, DetectionBackend, FixtureDetector, SceneAnalyzer, SceneReaderSlot,
        TextExtractionPipeline,
    },
    AppState,
};

struct BrokenDetector;

#[async_trait]
impl DetectionBackend for BrokenDetector {
    async fn detect(&self, _image: &[u8]) -> Result<Vec<Detection>, DetectError> {
        Err(DetectError::Backend("onnx session crashed".to_string()))
    }
}

fn state_with(detector: Arc<dyn DetectionBackend>) -> AppState {
    let analyzer = SceneAnalyzer::new(
        detector,
        ObstacleClassifier::new(ObstacleVocabulary::default()),
        TextExtractionPipeline::new(None, SceneReaderSlot::unavailable()),
    );
    AppState::new(Arc::new(analyzer), Duration::from_secs(5))
}

#[tokio::test]
async fn test_detect_returns_raw_detections() {
    let state = state_with(Arc::new(FixtureDetector));
    let response = detect_handler(State(state), ImagePayload(vec![0u8; 4]))
        .await
        .unwrap()
        .0;

    assert_eq!(response.detections.len(), 2);
    assert_eq!(response.detections[0].label, "person");
    assert_eq!(response.detections[0].confidence, 0.92);
    assert_eq!(response.detections[1].label, "chair");
}

#[tokio::test]
async fn test_detect_does_not_filter() {
    // /detect must expose the capability's raw output, including labels
    // the navigation vocabulary would drop
    struct KiteDetector;

    #[async_trait]
    impl DetectionBackend for KiteDetector {
        async fn detect(&self, _image: &[u8]) -> Result<Vec<Detection>, DetectError> {
            Ok(vec![Detection {
                label: "kite".to_string(),
                confidence: 0.5,
                bbox: Default::default(),
            }])
        }
    }

    let state = state_with(Arc::new(KiteDetector));
    let response = detect_handler(State(state), ImagePayload(vec![0u8; 4]))
        .await
        .unwrap()
        .0;
    assert_eq!(response.detections.len(), 1);
    assert_eq!(response.detections[0].label, "kite");
}

#[tokio::test]
async fn test_detect_backend_failure_is_internal_error() {
    let state = state_with(Arc::new(BrokenDetector));
    let result = detect_handler(State(state), ImagePayload(vec![0u8; 4])).await;

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
