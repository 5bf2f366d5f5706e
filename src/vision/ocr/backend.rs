// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Capability seams for the text-extraction backends
//!
//! Availability is an explicit outcome, not an exception class: a backend
//! whose native dependency is absent reports `Unavailable` and the
//! pipeline falls through; any substantive failure is `Runtime` and
//! terminates the pipeline with a diagnostic.

use async_trait::async_trait;
use image::DynamicImage;
use thiserror::Error;

use crate::vision::detection::BBox;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend's engine is not installed or not configured
    #[error("backend unavailable")]
    Unavailable,

    /// The backend ran but failed for a substantive reason
    #[error("{0}")]
    Runtime(String),
}

/// Document-text OCR over raw image bytes (the primary backend).
#[async_trait]
pub trait DocumentOcrBackend: Send + Sync {
    async fn read(&self, image: &[u8]) -> Result<String, BackendError>;
}

/// One piece of text located somewhere in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub region: BBox,
    pub text: String,
}

/// Scene-text reader over a decoded pixel buffer (the secondary backend).
///
/// Fragment order is the reader's own and is preserved downstream.
#[async_trait]
pub trait SceneTextBackend: Send + Sync {
    async fn read(&self, image: &DynamicImage) -> Result<Vec<TextFragment>, BackendError>;
}
