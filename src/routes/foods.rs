// ABOUTME: Route handler listing the nutrition reference store contents
// ABOUTME: Read-only view of canonical foods with per-serving profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Nutrition reference routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::models::FoodsResponse;
use crate::resources::ServerResources;

/// Foods route handlers
pub struct FoodsRoutes;

impl FoodsRoutes {
    /// Create the foods routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/foods", get(list_foods_handler))
            .with_state(resources)
    }
}

async fn list_foods_handler(
    State(resources): State<Arc<ServerResources>>,
) -> Json<FoodsResponse> {
    Json(FoodsResponse {
        foods: resources.store.all_foods(),
    })
}
