// ABOUTME: Route handlers for image analysis and post-hoc serving adjustments
// ABOUTME: Decodes and validates the upload, runs the pipeline, registers the live session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Analysis routes.
//!
//! `POST /analyze` accepts a base64 image, classifies it, runs the rules
//! pipeline, and returns the scored result. The session stays live in the
//! registry so `POST /analyze/:id/servings` can adjust one item's serving
//! size and return a fully re-derived result.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::{info, warn};
use uuid::Uuid;

use platewise_core::constants::upload;
use platewise_core::models::AnalysisResult;

use crate::errors::AppError;
use crate::models::{AnalyzeRequest, ServingRequest};
use crate::resources::ServerResources;

/// Analysis route handlers
pub struct AnalyzeRoutes;

impl AnalyzeRoutes {
    /// Create the analysis routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/analyze", post(analyze_handler))
            .route("/analyze/:id/servings", post(servings_handler))
            .with_state(resources)
    }
}

/// Decode and validate the uploaded image.
fn decode_image(request: &AnalyzeRequest, max_bytes: usize) -> Result<Vec<u8>, AppError> {
    if !upload::ACCEPTED_CONTENT_TYPES.contains(&request.content_type.as_str()) {
        return Err(AppError::InvalidInput(format!(
            "unsupported content type: {}",
            request.content_type
        )));
    }

    let image = BASE64
        .decode(&request.image_b64)
        .map_err(|e| AppError::InvalidInput(format!("invalid base64 image: {e}")))?;

    if image.is_empty() {
        return Err(AppError::InvalidInput("empty image".into()));
    }
    if image.len() > max_bytes {
        return Err(AppError::InvalidInput(format!(
            "image of {} bytes exceeds the {max_bytes} byte limit",
            image.len()
        )));
    }

    Ok(image)
}

async fn analyze_handler(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let image = decode_image(&request, resources.config.max_image_bytes)?;
    let cuisine = request.cuisine_context.as_deref();

    let predictions = resources.classifier.classify(&image).await?;
    let session = resources.analyzer.analyze(&predictions, cuisine)?;
    let result = session.result();

    // Storage is an audit trail; a failed write must not fail the analysis
    if let Err(e) = resources
        .database
        .save_analysis(
            resources.classifier.model_name(),
            &predictions,
            cuisine,
            &result,
        )
        .await
    {
        warn!(
            analysis_id = %result.analysis_id,
            error = %e,
            "failed to persist analysis"
        );
    }

    resources.sessions.insert(session).await;

    info!(
        analysis_id = %result.analysis_id,
        items = result.items.len(),
        total_calories = result.total_calories,
        health_score = result.health_score,
        "analysis served"
    );

    Ok(Json(result))
}

async fn servings_handler(
    State(resources): State<Arc<ServerResources>>,
    Path(analysis_id): Path<Uuid>,
    Json(request): Json<ServingRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = resources
        .sessions
        .set_serving(analysis_id, request.index, request.servings)
        .await?;

    info!(
        %analysis_id,
        index = request.index,
        servings = request.servings,
        "serving adjusted"
    );

    Ok(Json(result))
}
