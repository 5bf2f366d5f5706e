// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Tests for POST /ocr
//!
//! The endpoint never fails for a well-formed request with image bytes:
//! backend trouble shows up as a diagnostic string in a 200 body.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::State;
use fabstir_vision_node::{
    api::{ocr_handler, ImagePayload},
    navigation::{ObstacleClassifier, ObstacleVocabulary},
    vision::{
        ocr::{BackendError, DocumentOcrBackend, NOT_CONFIGURED},
        FixtureDetector, SceneAnalyzer, SceneReaderSlot, TextExtractionPipeline,
    },
    AppState,
};

enum DocBehavior {
    Text(&'static str),
    Unavailable,
    Fail(&'static str),
}

struct MockDoc(DocBehavior);

#[async_trait]
impl DocumentOcrBackend for MockDoc {
    async fn read(&self, _image: &[u8]) -> Result<String, BackendError> {
        match &self.0 {
            DocBehavior::Text(t) => Ok((*t).to_string()),
            DocBehavior::Unavailable => Err(BackendError::Unavailable),
            DocBehavior::Fail(e) => Err(BackendError::Runtime((*e).to_string())),
        }
    }
}

fn state_with_primary(primary: Option<MockDoc>) -> AppState {
    let pipeline = TextExtractionPipeline::new(
        primary.map(|p| Arc::new(p) as Arc<dyn DocumentOcrBackend>),
        SceneReaderSlot::unavailable(),
    );
    let analyzer = SceneAnalyzer::new(
        Arc::new(FixtureDetector),
        ObstacleClassifier::new(ObstacleVocabulary::default()),
        pipeline,
    );
    AppState::new(Arc::new(analyzer), Duration::from_secs(5))
}

#[tokio::test]
async fn test_ocr_success() {
    let state = state_with_primary(Some(MockDoc(DocBehavior::Text("  EXIT 12\n"))));
    let response = ocr_handler(State(state), ImagePayload(vec![0u8; 4]))
        .await
        .unwrap()
        .0;
    assert_eq!(response.text, "EXIT 12");
}

#[tokio::test]
async fn test_ocr_empty_page_is_empty_string() {
    let state = state_with_primary(Some(MockDoc(DocBehavior::Text("  \n"))));
    let response = ocr_handler(State(state), ImagePayload(vec![0u8; 4]))
        .await
        .unwrap()
        .0;
    assert_eq!(response.text, "");
}

#[tokio::test]
async fn test_ocr_not_configured_diagnostic() {
    let state = state_with_primary(None);
    let response = ocr_handler(State(state), ImagePayload(vec![0u8; 4]))
        .await
        .unwrap()
        .0;
    assert_eq!(response.text, NOT_CONFIGURED);
}

#[tokio::test]
async fn test_ocr_engine_absent_with_no_fallback_is_not_configured() {
    let state = state_with_primary(Some(MockDoc(DocBehavior::Unavailable)));
    let response = ocr_handler(State(state), ImagePayload(vec![0u8; 4]))
        .await
        .unwrap()
        .0;
    assert_eq!(response.text, NOT_CONFIGURED);
}

#[tokio::test]
async fn test_ocr_runtime_failure_is_diagnostic_not_error() {
    let state = state_with_primary(Some(MockDoc(DocBehavior::Fail("language pack corrupt"))));
    // Still a 200-shaped result; the failure rides in the text field
    let response = ocr_handler(State(state), ImagePayload(vec![0u8; 4]))
        .await
        .unwrap()
        .0;
    assert_eq!(response.text, "[OCR error: language pack corrupt]");
}
