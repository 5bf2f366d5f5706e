// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod navigation;
pub mod vision;

// Re-export the types most callers need
pub use api::{start_server, AppState};
pub use config::ServiceConfig;
pub use navigation::{Obstacle, ObstacleClassifier, ObstacleVocabulary};
pub use vision::{
    AnalysisResult, Detection, DetectionBackend, ExtractedText, FixtureDetector, SceneAnalyzer,
    SceneReaderSlot, TextExtractionPipeline,
};
