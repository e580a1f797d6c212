// ABOUTME: SQLite persistence for inference records, meals, meal items, and user feedback
// ABOUTME: Append-only audit trail; analysis responses never block on storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! # Database Management
//!
//! Persists the raw inference record, the derived meal with its items, and
//! user feedback. Storage is an audit trail: the live pipeline never reads
//! it back, so a failed write degrades to a log warning rather than a
//! failed analysis.

use anyhow::Result;
use chrono::Utc;
use sqlx::{Pool, Row, Sqlite, SqlitePool};
use uuid::Uuid;

use platewise_core::models::{AnalysisResult, Prediction};

use crate::models::{FeedbackRequest, FeedbackStats};

/// Database manager for analysis and feedback storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection or a migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when a DDL statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS inferences (
                id TEXT PRIMARY KEY,
                model_name TEXT NOT NULL,
                labels_json TEXT NOT NULL,
                cuisine_context TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meals (
                id TEXT PRIMARY KEY,
                inference_id TEXT NOT NULL REFERENCES inferences(id),
                total_calories INTEGER NOT NULL,
                health_score INTEGER NOT NULL,
                tips_json TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                meal_id TEXT NOT NULL REFERENCES meals(id),
                position INTEGER NOT NULL,
                label TEXT NOT NULL,
                canonical_name TEXT,
                confidence REAL NOT NULL,
                servings REAL NOT NULL,
                calories INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_feedback (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                meal_id TEXT NOT NULL,
                rating INTEGER NOT NULL,
                accuracy_rating INTEGER,
                corrections TEXT,
                cuisine_type TEXT,
                comment TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist one completed analysis: the raw inference record, the meal
    /// summary, and its items.
    ///
    /// # Errors
    ///
    /// Returns an error when any insert fails.
    pub async fn save_analysis(
        &self,
        model_name: &str,
        predictions: &[Prediction],
        cuisine_context: Option<&str>,
        result: &AnalysisResult,
    ) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let inference_id = Uuid::new_v4().to_string();
        let meal_id = result.analysis_id.to_string();

        let labels_json = serde_json::to_string(predictions)?;
        let tips_json = serde_json::to_string(&result.tips)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO inferences (id, model_name, labels_json, cuisine_context, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&inference_id)
        .bind(model_name)
        .bind(&labels_json)
        .bind(cuisine_context)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO meals (id, inference_id, total_calories, health_score, tips_json, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&meal_id)
        .bind(&inference_id)
        .bind(result.total_calories)
        .bind(i64::from(result.health_score))
        .bind(&tips_json)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        for (position, item) in result.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO meal_items
                 (meal_id, position, label, canonical_name, confidence, servings, calories)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .bind(&meal_id)
            .bind(i64::try_from(position)?)
            .bind(&item.label)
            .bind(item.canonical_name.as_deref())
            .bind(item.confidence)
            .bind(item.serving_multiplier)
            .bind(i64::from(item.nutrition.calories))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Persist one piece of user feedback.
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails.
    pub async fn save_feedback(&self, feedback: &FeedbackRequest) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_feedback
             (meal_id, rating, accuracy_rating, corrections, cuisine_type, comment, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(feedback.analysis_id.to_string())
        .bind(i64::from(feedback.rating))
        .bind(feedback.accuracy_rating.map(i64::from))
        .bind(feedback.corrections.as_deref())
        .bind(feedback.cuisine_type.as_deref())
        .bind(feedback.comment.as_deref())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Count stored meals, to verify analyses actually land on disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    pub async fn meal_count(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM meals")
            .fetch_one(&self.pool)
            .await?;
        row.try_get("n")
    }

    /// Aggregate feedback statistics: totals, mean ratings, and per-cuisine
    /// counts.
    ///
    /// # Errors
    ///
    /// Returns an error when a query fails.
    pub async fn feedback_stats(&self) -> Result<FeedbackStats, sqlx::Error> {
        let summary = sqlx::query(
            "SELECT COUNT(*) AS total,
                    AVG(rating) AS avg_rating,
                    AVG(accuracy_rating) AS avg_accuracy
             FROM user_feedback",
        )
        .fetch_one(&self.pool)
        .await?;

        let total_feedback: i64 = summary.try_get("total")?;
        let avg_rating: Option<f64> = summary.try_get("avg_rating")?;
        let avg_accuracy_rating: Option<f64> = summary.try_get("avg_accuracy")?;

        let cuisine_rows = sqlx::query(
            "SELECT cuisine_type, COUNT(*) AS n
             FROM user_feedback
             WHERE cuisine_type IS NOT NULL
             GROUP BY cuisine_type",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut cuisine_distribution = std::collections::HashMap::new();
        for row in cuisine_rows {
            let cuisine: String = row.try_get("cuisine_type")?;
            let count: i64 = row.try_get("n")?;
            cuisine_distribution.insert(cuisine, count);
        }

        Ok(FeedbackStats {
            total_feedback,
            avg_rating: avg_rating.map(round2),
            avg_accuracy_rating: avg_accuracy_rating.map(round2),
            cuisine_distribution,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
