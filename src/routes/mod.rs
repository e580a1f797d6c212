// ABOUTME: Route module organization for the Platewise HTTP API
// ABOUTME: Centralized router assembly with domain modules and shared middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! HTTP routes organized by domain. Each module contains route definitions
//! and thin handler functions that delegate to the pipeline and storage
//! layers.

use std::sync::Arc;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Image analysis and serving adjustment routes
pub mod analyze;
/// User feedback routes
pub mod feedback;
/// Nutrition reference listing routes
pub mod foods;
/// Health check and system status routes
pub mod health;

pub use analyze::AnalyzeRoutes;
pub use feedback::FeedbackRoutes;
pub use foods::FoodsRoutes;
pub use health::HealthRoutes;

/// Assemble the full application router.
#[must_use]
pub fn create_router(resources: Arc<ServerResources>) -> Router {
    // Base64 inflates the image roughly 4/3; double the binary cap covers
    // the encoding plus the JSON envelope.
    let body_limit = resources.config.max_image_bytes * 2;

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AnalyzeRoutes::routes(Arc::clone(&resources)))
        .merge(FoodsRoutes::routes(Arc::clone(&resources)))
        .merge(FeedbackRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
