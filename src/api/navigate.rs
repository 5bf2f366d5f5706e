// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /navigate - obstacle detection with spoken hints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::request::ImagePayload;
use crate::navigation::Obstacle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub obstacles: Vec<Obstacle>,
    pub hints: Vec<String>,
    pub speech: String,
}

pub async fn navigate_handler(
    State(state): State<AppState>,
    payload: ImagePayload,
) -> Result<Json<NavigateResponse>, ApiError> {
    debug!("navigate request: {} bytes", payload.0.len());

    let result = timeout(
        state.request_timeout,
        state.analyzer.analyze(&payload.0, true, false),
    )
    .await
    .map_err(|_| ApiError::Timeout)?;

    info!(
        "navigate complete: {} obstacles, speech {:?}",
        result.obstacles.len(),
        result.speech
    );

    Ok(Json(NavigateResponse {
        obstacles: result.obstacles,
        hints: result.hints,
        speech: result.speech,
    }))
}
