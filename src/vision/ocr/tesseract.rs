// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Document OCR via the tesseract command-line binary
//!
//! Runs `tesseract stdin stdout` per request. A missing binary maps to
//! `BackendError::Unavailable` so the pipeline can try the scene-text
//! reader instead; everything else is a runtime failure.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::backend::{BackendError, DocumentOcrBackend};

pub struct TesseractCli {
    binary: PathBuf,
}

impl TesseractCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

#[async_trait]
impl DocumentOcrBackend for TesseractCli {
    async fn read(&self, image: &[u8]) -> Result<String, BackendError> {
        let mut child = Command::new(&self.binary)
            .arg("stdin")
            .arg("stdout")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    BackendError::Unavailable
                } else {
                    BackendError::Runtime(format!("failed to spawn tesseract: {}", e))
                }
            })?;

        // Feed stdin while draining output. Writing the whole image first
        // would deadlock once tesseract fills its stdout pipe waiting for
        // us to read it.
        let stdin = child.stdin.take();
        let feed = async move {
            match stdin {
                // Dropping stdin closes the pipe so tesseract sees EOF
                Some(mut stdin) => stdin.write_all(image).await,
                None => Ok(()),
            }
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| BackendError::Runtime(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(BackendError::Runtime(format!(
                "tesseract exited with {}: {}",
                output.status, stderr
            )));
        }

        // A broken-pipe write usually means the process died; report the
        // exit status above first, then any genuine feed failure.
        fed.map_err(|e| BackendError::Runtime(format!("failed to feed image: {}", e)))?;

        debug!("tesseract produced {} bytes of text", output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
