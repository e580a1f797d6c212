// ABOUTME: Integration tests for the HTTP surface using in-process router requests
// ABOUTME: Exercises analyze, serving adjustment, foods, feedback, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use platewise_core::errors::ModelError;
use platewise_core::models::Prediction;
use platewise_core::store::StaticNutritionStore;
use platewise_providers::Classifier;
use platewise_server::database::Database;
use platewise_server::{routes, ServerConfig, ServerResources};

/// Classifier returning a fixed prediction list, or a fixed error.
struct FixedClassifier {
    predictions: Result<Vec<Prediction>, ModelError>,
}

#[async_trait]
impl Classifier for FixedClassifier {
    async fn classify(&self, _image: &[u8]) -> Result<Vec<Prediction>, ModelError> {
        self.predictions.clone()
    }

    fn model_name(&self) -> &str {
        "fixed/test"
    }
}

/// Build a router over a throwaway database, returning the shared resources
/// for direct state assertions. The `TempDir` must outlive the router so the
/// database file stays on disk.
async fn test_app(
    predictions: Result<Vec<Prediction>, ModelError>,
) -> (Router, Arc<ServerResources>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let database_url = format!("sqlite:{}/test.db", dir.path().display());

    let config = ServerConfig {
        database_url: database_url.clone(),
        ..ServerConfig::default()
    };
    let database = Database::new(&database_url).await.unwrap();
    let classifier = Arc::new(FixedClassifier { predictions });
    let store = Arc::new(StaticNutritionStore::new());

    let resources = Arc::new(ServerResources::new(config, database, classifier, store));
    let router = routes::create_router(Arc::clone(&resources));
    (router, resources, dir)
}

fn pizza_salad_predictions() -> Vec<Prediction> {
    vec![
        Prediction::new("pizza", 0.91),
        Prediction::new("salad", 0.55),
        Prediction::new("soda", 0.20),
    ]
}

fn analyze_body() -> String {
    json!({
        "image_b64": BASE64.encode(b"test image bytes"),
        "content_type": "image/jpeg",
    })
    .to_string()
}

async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let (app, _resources, _dir) = test_app(Ok(vec![])).await;
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"]["name"], "platewise-server");
    assert!(body["service"]["version"].is_string());
}

#[tokio::test]
async fn analyze_returns_a_scored_meal() {
    let (app, _resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;
    let (status, body) = post_json(&app, "/analyze", analyze_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_calories"], 435);
    assert_eq!(body["health_score"], 100);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["label"], "pizza");
    assert_eq!(body["items"][0]["servings"], 1.0);
    assert!(body["tips"].as_array().unwrap().is_empty());
    assert!(body["analysis_id"].is_string());
}

#[tokio::test]
async fn analyze_persists_the_meal_and_registers_the_session() {
    let (app, resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;
    assert!(resources.sessions.is_empty().await);
    assert_eq!(resources.database.meal_count().await.unwrap(), 0);

    let (status, _) = post_json(&app, "/analyze", analyze_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resources.database.meal_count().await.unwrap(), 1);
    assert!(!resources.sessions.is_empty().await);
    assert_eq!(resources.sessions.len().await, 1);
}

#[tokio::test]
async fn analyze_rejects_unsupported_content_type() {
    let (app, _resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;
    let body = json!({
        "image_b64": BASE64.encode(b"bytes"),
        "content_type": "image/gif",
    })
    .to_string();

    let (status, body) = post_json(&app, "/analyze", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn analyze_rejects_invalid_base64() {
    let (app, _resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;
    let body = json!({
        "image_b64": "not!!base64",
        "content_type": "image/jpeg",
    })
    .to_string();

    let (status, body) = post_json(&app, "/analyze", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn empty_classifier_output_is_unprocessable() {
    let (app, _resources, _dir) = test_app(Ok(vec![])).await;
    let (status, body) = post_json(&app, "/analyze", analyze_body()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "NO_FOOD_DETECTED");
}

#[tokio::test]
async fn classifier_failure_maps_to_bad_gateway() {
    let (app, _resources, _dir) = test_app(Err(ModelError::inference_failed("model crashed"))).await;
    let (status, body) = post_json(&app, "/analyze", analyze_body()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "MODEL_ERROR");
}

#[tokio::test]
async fn serving_adjustment_rescales_the_result() {
    let (app, _resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;
    let (_, analysis) = post_json(&app, "/analyze", analyze_body()).await;
    let analysis_id = analysis["analysis_id"].as_str().unwrap().to_owned();

    let (status, adjusted) = post_json(
        &app,
        &format!("/analyze/{analysis_id}/servings"),
        json!({ "index": 0, "servings": 2.0 }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(adjusted["analysis_id"], analysis["analysis_id"]);
    assert_eq!(adjusted["total_calories"], 720);
    assert_eq!(adjusted["health_score"], 96);
    assert_eq!(adjusted["items"][0]["servings"], 2.0);
}

#[tokio::test]
async fn serving_adjustment_on_unknown_analysis_is_not_found() {
    let (app, _resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;

    let (status, body) = post_json(
        &app,
        "/analyze/00000000-0000-0000-0000-000000000000/servings",
        json!({ "index": 0, "servings": 2.0 }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "ANALYSIS_NOT_FOUND");
}

#[tokio::test]
async fn serving_adjustment_with_bad_index_is_bad_request() {
    let (app, _resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;
    let (_, analysis) = post_json(&app, "/analyze", analyze_body()).await;
    let analysis_id = analysis["analysis_id"].as_str().unwrap().to_owned();

    let (status, body) = post_json(
        &app,
        &format!("/analyze/{analysis_id}/servings"),
        json!({ "index": 9, "servings": 2.0 }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ITEM_INDEX");
}

#[tokio::test]
async fn foods_endpoint_lists_the_reference_store() {
    let (app, _resources, _dir) = test_app(Ok(vec![])).await;
    let (status, body) = get_json(&app, "/foods").await;

    assert_eq!(status, StatusCode::OK);
    let foods = body["foods"].as_array().unwrap();
    assert!(!foods.is_empty());
    assert!(foods
        .iter()
        .any(|f| f["canonical_name"] == "pizza" && f["nutrition"]["calories"] == 285));
}

#[tokio::test]
async fn feedback_is_recorded() {
    let (app, _resources, _dir) = test_app(Ok(pizza_salad_predictions())).await;
    let (_, analysis) = post_json(&app, "/analyze", analyze_body()).await;

    let (status, body) = post_json(
        &app,
        "/feedback",
        json!({
            "analysis_id": analysis["analysis_id"],
            "rating": 4,
            "accuracy_rating": 5,
            "cuisine_type": "italian",
            "comment": "close enough"
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "recorded");
}

#[tokio::test]
async fn feedback_stats_aggregate_ratings_and_cuisines() {
    let (app, _resources, _dir) = test_app(Ok(vec![])).await;

    for (rating, accuracy, cuisine) in [
        (4, Some(5), "italian"),
        (2, None::<u8>, "italian"),
        (3, Some(3), "japanese"),
    ] {
        let (status, _) = post_json(
            &app,
            "/feedback",
            json!({
                "analysis_id": Uuid::new_v4(),
                "rating": rating,
                "accuracy_rating": accuracy,
                "cuisine_type": cuisine,
            })
            .to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, stats) = get_json(&app, "/feedback/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_feedback"], 3);
    assert_eq!(stats["avg_rating"], 3.0);
    // Only the two rows that supplied an accuracy rating count
    assert_eq!(stats["avg_accuracy_rating"], 4.0);
    assert_eq!(stats["cuisine_distribution"]["italian"], 2);
    assert_eq!(stats["cuisine_distribution"]["japanese"], 1);
}

#[tokio::test]
async fn feedback_stats_with_no_feedback_omit_averages() {
    let (app, _resources, _dir) = test_app(Ok(vec![])).await;
    let (status, stats) = get_json(&app, "/feedback/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_feedback"], 0);
    assert!(stats.get("avg_rating").is_none());
    assert!(stats["cuisine_distribution"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn feedback_with_out_of_range_rating_is_rejected() {
    let (app, _resources, _dir) = test_app(Ok(vec![])).await;

    let (status, body) = post_json(
        &app,
        "/feedback",
        json!({
            "analysis_id": "7f1c9f5e-4a7e-4a0f-9a1d-0e8b2f6c3d21",
            "rating": 6
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}
