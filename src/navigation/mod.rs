// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Navigation decision pipeline
//!
//! Turns raw detections into spoken-ready guidance:
//! - Hint catalog mapping obstacle labels to short TTS phrases
//! - Declarative vocabulary deciding which labels are navigation-relevant
//! - Classifier filtering detections into hinted obstacles
//! - Speech composition with empty-scene sentinels

pub mod classifier;
pub mod hints;
pub mod speech;
pub mod vocabulary;

pub use classifier::{Obstacle, ObstacleClassifier};
pub use hints::hint_for;
pub use speech::{compose_combined, compose_obstacles, NOTHING_FOUND, PATH_CLEAR};
pub use vocabulary::{ObstacleVocabulary, VocabularyError};
