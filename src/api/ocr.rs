// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /ocr - extract text from an image (papers, signs) for TTS reading

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::request::ImagePayload;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Extracted text; empty when nothing was found, or a bracketed
    /// diagnostic when no backend could run
    pub text: String,
}

pub async fn ocr_handler(
    State(state): State<AppState>,
    payload: ImagePayload,
) -> Result<Json<OcrResponse>, ApiError> {
    debug!("ocr request: {} bytes", payload.0.len());

    let extracted = timeout(state.request_timeout, state.analyzer.extract_text(&payload.0))
        .await
        .map_err(|_| ApiError::Timeout)?;

    info!("ocr complete: {} chars", extracted.as_str().len());

    Ok(Json(OcrResponse {
        text: extracted.into_string(),
    }))
}
