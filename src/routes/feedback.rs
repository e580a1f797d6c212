// ABOUTME: Route handler recording user feedback on analysis quality
// ABOUTME: Validates the rating and appends to the feedback audit table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Feedback routes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::{FeedbackRequest, FeedbackStats};
use crate::resources::ServerResources;

/// Feedback route handlers
pub struct FeedbackRoutes;

impl FeedbackRoutes {
    /// Create the feedback routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/feedback", post(feedback_handler))
            .route("/feedback/stats", get(feedback_stats_handler))
            .with_state(resources)
    }
}

async fn feedback_handler(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    request.validate()?;
    resources.database.save_feedback(&request).await?;

    info!(
        analysis_id = %request.analysis_id,
        rating = request.rating,
        "feedback recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "status": "recorded" })),
    ))
}

async fn feedback_stats_handler(
    State(resources): State<Arc<ServerResources>>,
) -> Result<Json<FeedbackStats>, AppError> {
    Ok(Json(resources.database.feedback_stats().await?))
}
