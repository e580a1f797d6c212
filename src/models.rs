// ABOUTME: Request and response payloads for the HTTP API
// ABOUTME: Thin serde DTOs with request validation; domain types serialize themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! HTTP request and response payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platewise_core::store::FoodRecord;

use crate::errors::AppError;

/// Maximum accepted feedback comment length in characters.
const MAX_COMMENT_CHARS: usize = 1000;

/// Request body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64-encoded image bytes (standard alphabet, with padding)
    pub image_b64: String,
    /// Declared MIME type of the image, e.g. `image/jpeg`
    pub content_type: String,
    /// Optional cuisine hint steering label resolution, e.g. `italian`
    #[serde(default)]
    pub cuisine_context: Option<String>,
}

/// Request body for `POST /analyze/:id/servings`.
#[derive(Debug, Deserialize)]
pub struct ServingRequest {
    /// Zero-based index of the item to adjust
    pub index: usize,
    /// New serving multiplier; values outside [0.25, 5] are clamped
    pub servings: f64,
}

/// Request body for `POST /feedback`.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    /// The analysis this feedback refers to
    pub analysis_id: Uuid,
    /// Overall rating from 1 (useless) to 5 (spot on)
    pub rating: u8,
    /// Optional rating of detection accuracy, same 1 to 5 scale
    #[serde(default)]
    pub accuracy_rating: Option<u8>,
    /// Optional corrected labels, e.g. "that was a wrap, not a sandwich"
    #[serde(default)]
    pub corrections: Option<String>,
    /// Optional cuisine the user says the meal actually was
    #[serde(default)]
    pub cuisine_type: Option<String>,
    /// Optional free-text comment
    #[serde(default)]
    pub comment: Option<String>,
}

impl FeedbackRequest {
    /// Validate field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] when a rating is outside 1..=5
    /// or a free-text field exceeds the length cap.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::InvalidInput(format!(
                "rating must be between 1 and 5, got {}",
                self.rating
            )));
        }
        if let Some(accuracy) = self.accuracy_rating {
            if !(1..=5).contains(&accuracy) {
                return Err(AppError::InvalidInput(format!(
                    "accuracy_rating must be between 1 and 5, got {accuracy}"
                )));
            }
        }
        for (field, value) in [
            ("corrections", &self.corrections),
            ("comment", &self.comment),
        ] {
            if let Some(text) = value {
                if text.chars().count() > MAX_COMMENT_CHARS {
                    return Err(AppError::InvalidInput(format!(
                        "{field} exceeds {MAX_COMMENT_CHARS} characters"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Response body for `GET /foods`.
#[derive(Debug, Serialize)]
pub struct FoodsResponse {
    /// Every food the reference store knows, with per-serving nutrition
    pub foods: Vec<FoodRecord>,
}

/// Response body for `GET /feedback/stats`.
///
/// Aggregates the `user_feedback` table for model improvement analysis:
/// which cuisines users report on most, and how detection quality trends.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackStats {
    /// Number of feedback rows recorded
    pub total_feedback: i64,
    /// Mean overall rating, rounded to 2 decimal places; absent with no data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
    /// Mean accuracy rating over rows that supplied one; absent with none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_accuracy_rating: Option<f64>,
    /// Feedback counts per reported cuisine type
    pub cuisine_distribution: HashMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(rating: u8, comment: Option<&str>) -> FeedbackRequest {
        FeedbackRequest {
            analysis_id: Uuid::new_v4(),
            rating,
            accuracy_rating: None,
            corrections: None,
            cuisine_type: None,
            comment: comment.map(str::to_owned),
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(feedback(1, None).validate().is_ok());
        assert!(feedback(5, None).validate().is_ok());
        assert!(feedback(0, None).validate().is_err());
        assert!(feedback(6, None).validate().is_err());
    }

    #[test]
    fn accuracy_rating_shares_the_bounds() {
        let mut req = feedback(3, None);
        req.accuracy_rating = Some(5);
        assert!(req.validate().is_ok());
        req.accuracy_rating = Some(0);
        assert!(req.validate().is_err());
    }

    #[test]
    fn oversized_comment_is_rejected() {
        let long = "x".repeat(MAX_COMMENT_CHARS + 1);
        assert!(feedback(3, Some(&long)).validate().is_err());
    }
}
