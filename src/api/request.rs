// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image payload extraction
//!
//! Clients send the image either as a multipart form field named `image`
//! or as a JSON body `{"imageBase64": "..."}`. Anything else is a
//! missing-input client error and the core pipeline is never invoked.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use axum_extra::extract::Multipart;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::api::errors::ApiError;

/// Raw image bytes resolved from the request body.
pub struct ImagePayload(pub Vec<u8>);

#[derive(Debug, Deserialize)]
struct ImageJson {
    #[serde(rename = "imageBase64", default)]
    image_base64: Option<String>,
}

#[async_trait]
impl<S> FromRequest<S> for ImagePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
            {
                if field.name() == Some("image") {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
                    if !bytes.is_empty() {
                        return Ok(ImagePayload(bytes.to_vec()));
                    }
                }
            }
            return Err(ApiError::MissingInput);
        }

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<ImageJson>::from_request(req, state)
                .await
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

            let encoded = match body.image_base64 {
                Some(b64) if !b64.is_empty() => b64,
                _ => return Err(ApiError::MissingInput),
            };
            let bytes = STANDARD
                .decode(encoded)
                .map_err(|e| ApiError::InvalidRequest(format!("invalid imageBase64: {}", e)))?;
            if bytes.is_empty() {
                return Err(ApiError::MissingInput);
            }
            return Ok(ImagePayload(bytes));
        }

        Err(ApiError::MissingInput)
    }
}
