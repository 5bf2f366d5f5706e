// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Resilient multi-backend text extraction
//!
//! Backends are tried in strict priority order: the document OCR engine
//! first, then a scene-text reader that needs a decoded pixel buffer. An
//! unavailable backend falls through silently; a backend that ran and
//! failed terminates the pipeline with a diagnostic. Only when no backend
//! exists at all does the caller see the not-configured diagnostic.
//!
//! Components:
//! - `backend` - capability traits and the tagged availability outcome
//! - `tesseract` - shipped document OCR backend (subprocess)

pub mod backend;
pub mod tesseract;

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::vision::image_utils::decode_image_bytes;

pub use backend::{BackendError, DocumentOcrBackend, SceneTextBackend, TextFragment};
pub use tesseract::TesseractCli;

/// Diagnostic returned when no OCR backend is configured at all
pub const NOT_CONFIGURED: &str =
    "[OCR not configured: install the tesseract binary, or wire a scene-text reader]";

/// Outcome of a text-extraction request.
///
/// The three cases share one wire representation (a plain string) but are
/// distinct in the type: recovered text, a genuinely empty page, and a
/// diagnostic describing a failed or unconfigured backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedText {
    /// Non-empty recovered text
    Text(String),
    /// Nothing found; not an error
    Empty,
    /// Backend failure or misconfiguration, in operator-readable form
    Diagnostic(String),
}

impl ExtractedText {
    /// Trim raw engine output; whitespace-only output is a valid empty
    /// result, not an error.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            ExtractedText::Empty
        } else {
            ExtractedText::Text(trimmed.to_string())
        }
    }

    /// String form used on the wire and in speech composition. A
    /// diagnostic keeps its bracketed text, matching the service's
    /// degraded-answer-over-hard-failure policy.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractedText::Text(s) | ExtractedText::Diagnostic(s) => s,
            ExtractedText::Empty => "",
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ExtractedText::Text(s) | ExtractedText::Diagnostic(s) => s,
            ExtractedText::Empty => String::new(),
        }
    }
}

type SceneReaderFactory = dyn Fn() -> Option<Arc<dyn SceneTextBackend>> + Send + Sync;

/// Lazily-built scene-text reader shared across requests.
///
/// Reader construction is expensive, so it happens at most once per
/// process: concurrent first users all wait on the same initialization.
/// The slot is owned by the composition root, not a module-level global.
pub struct SceneReaderSlot {
    factory: Box<SceneReaderFactory>,
    reader: OnceCell<Option<Arc<dyn SceneTextBackend>>>,
}

impl SceneReaderSlot {
    pub fn new(factory: impl Fn() -> Option<Arc<dyn SceneTextBackend>> + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            reader: OnceCell::new(),
        }
    }

    /// A slot with no reader behind it
    pub fn unavailable() -> Self {
        Self::new(|| None)
    }

    async fn get(&self) -> Option<Arc<dyn SceneTextBackend>> {
        self.reader
            .get_or_init(|| std::future::ready((self.factory)()))
            .await
            .clone()
    }
}

/// Ordered OCR backends with graceful degradation.
pub struct TextExtractionPipeline {
    primary: Option<Arc<dyn DocumentOcrBackend>>,
    secondary: SceneReaderSlot,
}

impl TextExtractionPipeline {
    pub fn new(primary: Option<Arc<dyn DocumentOcrBackend>>, secondary: SceneReaderSlot) -> Self {
        Self { primary, secondary }
    }

    /// Extract text from raw image bytes.
    ///
    /// Never fails: the worst outcome is a diagnostic. A primary backend
    /// that ran and failed is terminal; the scene reader is only consulted
    /// when the primary is absent or its engine is missing.
    pub async fn extract(&self, image: &[u8]) -> ExtractedText {
        if let Some(primary) = &self.primary {
            match primary.read(image).await {
                Ok(raw) => return ExtractedText::from_raw(&raw),
                Err(BackendError::Unavailable) => {
                    debug!("document OCR engine unavailable, trying scene-text reader");
                }
                Err(BackendError::Runtime(e)) => {
                    warn!("document OCR failed: {}", e);
                    return ExtractedText::Diagnostic(format!("[OCR error: {}]", e));
                }
            }
        }

        let reader = match self.secondary.get().await {
            Some(reader) => reader,
            None => return ExtractedText::Diagnostic(NOT_CONFIGURED.to_string()),
        };

        // Undecodable input is an empty page to the caller, not an error
        let decoded = match decode_image_bytes(image) {
            Ok((img, _)) => img,
            Err(e) => {
                debug!("scene-text decode failed: {}", e);
                return ExtractedText::Empty;
            }
        };

        match reader.read(&decoded).await {
            Ok(fragments) => {
                let joined = fragments
                    .iter()
                    .map(|f| f.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                if joined.is_empty() {
                    ExtractedText::Empty
                } else {
                    ExtractedText::Text(joined)
                }
            }
            Err(BackendError::Unavailable) => ExtractedText::Diagnostic(NOT_CONFIGURED.to_string()),
            Err(BackendError::Runtime(e)) => {
                warn!("scene-text reader failed: {}", e);
                ExtractedText::Diagnostic(format!("[OCR error: {}]", e))
            }
        }
    }
}
