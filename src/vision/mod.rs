// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing module for CPU-based image analysis
//!
//! This module provides:
//! - Object detection capability seam plus the shipped fixture detector
//! - Multi-backend OCR with graceful degradation
//! - Scene analysis combining both into spoken guidance

pub mod analyzer;
pub mod detection;
pub mod image_utils;
pub mod ocr;

pub use analyzer::{AnalysisResult, SceneAnalyzer};
pub use detection::{BBox, DetectError, Detection, DetectionBackend, FixtureDetector};
pub use image_utils::{decode_image_bytes, detect_format, ImageError, ImageInfo};
pub use ocr::{ExtractedText, SceneReaderSlot, TextExtractionPipeline};
