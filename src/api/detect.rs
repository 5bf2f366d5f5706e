// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /detect - raw object detections

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::debug;

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::request::ImagePayload;
use crate::vision::Detection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub detections: Vec<Detection>,
}

/// Return the detection capability's raw output, unfiltered.
pub async fn detect_handler(
    State(state): State<AppState>,
    payload: ImagePayload,
) -> Result<Json<DetectResponse>, ApiError> {
    debug!("detect request: {} bytes", payload.0.len());

    let detections = timeout(state.request_timeout, state.analyzer.detect_raw(&payload.0))
        .await
        .map_err(|_| ApiError::Timeout)?
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(Json(DetectResponse { detections }))
}
