// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Tests for GET /health and route registration

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use fabstir_vision_node::{
    api::{http_server::health_handler, router, AppState},
    navigation::{ObstacleClassifier, ObstacleVocabulary},
    vision::{FixtureDetector, SceneAnalyzer, SceneReaderSlot, TextExtractionPipeline},
};
use tower::ServiceExt;

fn test_state() -> AppState {
    let analyzer = SceneAnalyzer::new(
        Arc::new(FixtureDetector),
        ObstacleClassifier::new(ObstacleVocabulary::default()),
        TextExtractionPipeline::new(None, SceneReaderSlot::unavailable()),
    );
    AppState::new(Arc::new(analyzer), Duration::from_secs(5))
}

#[tokio::test]
async fn test_health_capability_descriptor() {
    let response = health_handler().await.0;
    assert_eq!(response.status, "ok");
    assert_eq!(response.service, "vision");
    assert_eq!(response.features, vec!["detect", "ocr", "navigate"]);
}

#[tokio::test]
async fn test_health_route_registered() {
    let app = router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "vision");
}

#[tokio::test]
async fn test_post_route_without_image_is_client_error() {
    let app = router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/navigate")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["error"],
        "image required (multipart 'image' or JSON imageBase64)"
    );
}

#[tokio::test]
async fn test_json_image_accepted_end_to_end() {
    let app = router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/navigate")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"imageBase64": "aGVsbG8="}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["obstacles"].as_array().unwrap().len(), 2);
}
