// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod detect;
pub mod errors;
pub mod http_server;
pub mod navigate;
pub mod ocr;
pub mod request;

pub use analyze::{analyze_handler, AnalyzeResponse, OcrSection};
pub use detect::{detect_handler, DetectResponse};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{router, start_server, AppState, HealthResponse};
pub use navigate::{navigate_handler, NavigateResponse};
pub use ocr::{ocr_handler, OcrResponse};
pub use request::ImagePayload;
