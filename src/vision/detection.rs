// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Object detection capability seam
//!
//! Detections are produced only by a [`DetectionBackend`]; the rest of the
//! pipeline treats them as immutable input. The shipped backend is a
//! fixture detector standing in for a real model; a YOLO-class detector
//! plugs in behind the same trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Axis-aligned bounding box in pixel coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub w: f32,
    #[serde(default)]
    pub h: f32,
}

fn default_label() -> String {
    "object".to_string()
}

/// One raw perception output from the detection capability.
///
/// Backends that omit fields still deserialize: a missing label becomes
/// `"object"`, missing confidence 0, missing bbox all zeroes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub bbox: BBox,
}

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("detection backend failed: {0}")]
    Backend(String),
}

/// A replaceable object-detection engine.
///
/// "Nothing detected" is `Ok` with an empty vector, never an error.
#[async_trait]
pub trait DetectionBackend: Send + Sync {
    async fn detect(&self, image: &[u8]) -> Result<Vec<Detection>, DetectError>;
}

/// Fixture detector returning a fixed indoor scene.
///
/// Stands in for real model inference until a detector is wired up, so the
/// navigation pipeline stays exercisable end to end.
#[derive(Debug, Clone, Default)]
pub struct FixtureDetector;

#[async_trait]
impl DetectionBackend for FixtureDetector {
    async fn detect(&self, _image: &[u8]) -> Result<Vec<Detection>, DetectError> {
        Ok(vec![
            Detection {
                label: "person".to_string(),
                confidence: 0.92,
                bbox: BBox {
                    x: 100.0,
                    y: 50.0,
                    w: 80.0,
                    h: 180.0,
                },
            },
            Detection {
                label: "chair".to_string(),
                confidence: 0.87,
                bbox: BBox {
                    x: 200.0,
                    y: 120.0,
                    w: 60.0,
                    h: 90.0,
                },
            },
        ])
    }
}
