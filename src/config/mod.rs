// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration from environment variables

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, fixed at process start.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port for the HTTP API (`API_PORT`, default 5000)
    pub api_port: u16,
    /// Per-request deadline (`REQUEST_TIMEOUT_SECS`, default 30)
    pub request_timeout: Duration,
    /// Optional JSON file replacing the built-in obstacle vocabulary
    /// (`OBSTACLE_VOCAB_PATH`)
    pub vocabulary_path: Option<PathBuf>,
    /// Document OCR binary (`TESSERACT_BIN`, default "tesseract"; empty
    /// string disables the primary backend)
    pub tesseract_binary: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);

        let request_timeout = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let vocabulary_path = env::var("OBSTACLE_VOCAB_PATH").ok().map(PathBuf::from);

        let tesseract_binary = match env::var("TESSERACT_BIN") {
            Ok(bin) if bin.is_empty() => None,
            Ok(bin) => Some(bin),
            Err(_) => Some("tesseract".to_string()),
        };

        Self {
            api_port,
            request_timeout,
            vocabulary_path,
            tesseract_binary,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_port: 5000,
            request_timeout: Duration::from_secs(30),
            vocabulary_path: None,
            tesseract_binary: Some("tesseract".to_string()),
        }
    }
}
