// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{analyze_handler, detect_handler, navigate_handler, ocr_handler};
use crate::vision::SceneAnalyzer;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SceneAnalyzer>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(analyzer: Arc<SceneAnalyzer>, request_timeout: Duration) -> Self {
        Self {
            analyzer,
            request_timeout,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub features: Vec<String>,
}

impl HealthResponse {
    fn current() -> Self {
        Self {
            status: "ok".to_string(),
            service: "vision".to_string(),
            features: vec![
                "detect".to_string(),
                "ocr".to_string(),
                "navigate".to_string(),
            ],
        }
    }
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::current())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check / capability descriptor
        .route("/health", get(health_handler))
        // Raw detections
        .route("/detect", post(detect_handler))
        // Text extraction for TTS reading
        .route("/ocr", post(ocr_handler))
        // Obstacles + spoken hints for navigation
        .route("/navigate", post(navigate_handler))
        // Combined OCR + obstacle analysis
        .route("/analyze", post(analyze_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("vision API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
