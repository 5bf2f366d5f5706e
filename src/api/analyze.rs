// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /analyze - combined OCR + obstacle analysis for full scene understanding

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::request::ImagePayload;
use crate::navigation::Obstacle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrSection {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub ocr: OcrSection,
    pub obstacles: Vec<Obstacle>,
    pub hints: Vec<String>,
    pub speech: String,
}

pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: ImagePayload,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    debug!("analyze request: {} bytes", payload.0.len());

    let result = timeout(
        state.request_timeout,
        state.analyzer.analyze(&payload.0, true, true),
    )
    .await
    .map_err(|_| ApiError::Timeout)?;

    let text = result
        .text
        .map(|t| t.into_string())
        .unwrap_or_default();

    info!(
        "analyze complete: {} obstacles, {} chars of text",
        result.obstacles.len(),
        text.len()
    );

    Ok(Json(AnalyzeResponse {
        ocr: OcrSection { text },
        obstacles: result.obstacles,
        hints: result.hints,
        speech: result.speech,
    }))
}
