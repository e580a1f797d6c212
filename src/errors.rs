// ABOUTME: Unified application error type with stable error codes and HTTP mapping
// ABOUTME: Every route handler returns AppError; the IntoResponse impl shapes the JSON body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! # Unified Error Handling
//!
//! All HTTP handlers return [`AppError`]. Each variant carries a stable
//! machine-readable code and maps to exactly one HTTP status, so clients
//! can branch on `error.code` without parsing messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use platewise_core::errors::{AnalysisError, ModelError};

/// Application error covering the full HTTP surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Pipeline rejected the input (no detection, bad item index)
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The classifier failed or is unavailable
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Request payload failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serving adjustment addressed an analysis the registry no longer holds
    #[error("analysis {0} not found")]
    SessionNotFound(Uuid),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Analysis(AnalysisError::NoDetection) => "NO_FOOD_DETECTED",
            Self::Analysis(AnalysisError::InvalidItemIndex { .. }) => "INVALID_ITEM_INDEX",
            Self::Model(_) => "MODEL_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::SessionNotFound(_) => "ANALYSIS_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::Analysis(AnalysisError::NoDetection) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Analysis(AnalysisError::InvalidItemIndex { .. }) | Self::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Model(_) => StatusCode::BAD_GATEWAY,
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal failure details go to the log, not the client
        let message = match &self {
            Self::Database(e) => {
                error!(error = %e, "database operation failed");
                "internal storage error".to_owned()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message,
            }
        }));

        (self.http_status(), body).into_response()
    }
}
