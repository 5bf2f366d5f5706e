// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;
use std::sync::Arc;

use anyhow::Result;
use fabstir_vision_node::{
    api::{start_server, AppState},
    config::ServiceConfig,
    navigation::{ObstacleClassifier, ObstacleVocabulary},
    vision::{
        ocr::{DocumentOcrBackend, TesseractCli},
        FixtureDetector, SceneAnalyzer, SceneReaderSlot, TextExtractionPipeline,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Fabstir Vision Node...\n");

    let config = ServiceConfig::from_env();

    let vocabulary = match &config.vocabulary_path {
        Some(path) => {
            let vocab = ObstacleVocabulary::from_json_file(path)?;
            println!("📋 Obstacle vocabulary loaded from {}", path.display());
            vocab
        }
        None => ObstacleVocabulary::default(),
    };

    let primary = config
        .tesseract_binary
        .as_ref()
        .map(|bin| Arc::new(TesseractCli::new(bin)) as Arc<dyn DocumentOcrBackend>);
    match &primary {
        Some(_) => println!("📖 Document OCR: tesseract subprocess"),
        None => println!("📖 Document OCR: disabled"),
    }

    // No scene-text reader is shipped; one plugs in here behind the slot
    let pipeline = TextExtractionPipeline::new(primary, SceneReaderSlot::unavailable());

    let analyzer = SceneAnalyzer::new(
        Arc::new(FixtureDetector),
        ObstacleClassifier::new(vocabulary),
        pipeline,
    );

    let state = AppState::new(Arc::new(analyzer), config.request_timeout);

    start_server(state, config.api_port)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
