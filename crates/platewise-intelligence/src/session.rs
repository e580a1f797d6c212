// ABOUTME: Serving-adjustment session - mutate one item's serving size, re-derive the result
// ABOUTME: Pure re-derivation each edit; idempotent under replay, no incremental state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Analysis session for live serving adjustments.
//!
//! The session owns the detected items from one analysis. Every
//! [`AnalysisSession::set_serving`] call clamps and writes the multiplier,
//! then synchronously re-runs aggregation, scoring, and tip generation over
//! all items to produce a fresh [`AnalysisResult`]. The result for a given
//! multiplier vector is identical regardless of edit history; no partial
//! state is ever observable.

use platewise_core::errors::AnalysisError;
use platewise_core::models::{AnalysisResult, DetectedItem};
use tracing::debug;
use uuid::Uuid;

use crate::aggregator::aggregate;
use crate::config::AnalysisConfig;
use crate::health_score::calculate_health_score;
use crate::tips::generate_tips;

/// Per-analysis state for serving adjustments.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    analysis_id: Uuid,
    items: Vec<DetectedItem>,
    config: AnalysisConfig,
}

impl AnalysisSession {
    /// Create a session over detected items. Each item keeps its current
    /// serving multiplier (1.0 at analysis time).
    #[must_use]
    pub const fn new(analysis_id: Uuid, items: Vec<DetectedItem>, config: AnalysisConfig) -> Self {
        Self {
            analysis_id,
            items,
            config,
        }
    }

    /// Handle identifying this session.
    #[must_use]
    pub const fn analysis_id(&self) -> Uuid {
        self.analysis_id
    }

    /// The detected items in their current state.
    #[must_use]
    pub fn items(&self) -> &[DetectedItem] {
        &self.items
    }

    /// Derive the current immutable result snapshot.
    ///
    /// Total calories are rounded here, at the output boundary; the
    /// aggregation underneath never rounds.
    #[must_use]
    pub fn result(&self) -> AnalysisResult {
        let totals = aggregate(&self.items);
        let health_score = calculate_health_score(&totals, &self.items, &self.config.scoring);
        let tips = generate_tips(&totals, &self.config.tips);

        AnalysisResult {
            analysis_id: self.analysis_id,
            total_calories: totals.calories.round() as i64,
            health_score,
            items: self.items.clone(),
            tips,
        }
    }

    /// Set one item's serving multiplier and re-derive the result.
    ///
    /// Out-of-range values are silently clamped to [0.25, 5]; the recompute
    /// always covers all items, so the returned snapshot is complete.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidItemIndex`] when `index` does not
    /// address a detected item.
    pub fn set_serving(&mut self, index: usize, value: f64) -> Result<AnalysisResult, AnalysisError> {
        let item_count = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(AnalysisError::InvalidItemIndex { index, item_count })?;

        item.set_serving_multiplier(value);
        debug!(
            analysis_id = %self.analysis_id,
            index,
            servings = item.serving_multiplier,
            "serving adjusted, re-deriving result"
        );

        Ok(self.result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::models::NutritionProfile;

    fn session() -> AnalysisSession {
        let items = vec![
            DetectedItem::new(
                "pizza",
                Some("pizza".to_owned()),
                0.91,
                NutritionProfile::new(285, 12.0, 36.0, 10.0, 2.0, 4.0, 2.0),
                Some(platewise_core::models::CautionCategory::Pizza),
            ),
            DetectedItem::new(
                "salad",
                Some("salad".to_owned()),
                0.55,
                NutritionProfile::new(150, 4.0, 10.0, 10.0, 3.0, 2.0, 1.0),
                None,
            ),
        ];
        AnalysisSession::new(Uuid::new_v4(), items, AnalysisConfig::default())
    }

    #[test]
    fn set_serving_is_idempotent() {
        let mut s = session();
        let first = s.set_serving(0, 2.0).unwrap();
        let second = s.set_serving(0, 2.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn replay_history_does_not_matter() {
        let mut a = session();
        a.set_serving(0, 4.0).unwrap();
        a.set_serving(0, 0.5).unwrap();
        let via_detour = a.set_serving(0, 2.0).unwrap();

        let mut b = session();
        let direct = b.set_serving(0, 2.0).unwrap();

        assert_eq!(via_detour.total_calories, direct.total_calories);
        assert_eq!(via_detour.health_score, direct.health_score);
        assert_eq!(via_detour.tips, direct.tips);
    }

    #[test]
    fn out_of_range_values_clamp_silently() {
        let mut s = session();
        let low = s.set_serving(0, 0.0).unwrap();
        assert!((low.items[0].serving_multiplier - 0.25).abs() < f64::EPSILON);

        let high = s.set_serving(0, 99.0).unwrap();
        assert!((high.items[0].serving_multiplier - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_index_is_an_error() {
        let mut s = session();
        assert_eq!(
            s.set_serving(7, 1.0),
            Err(AnalysisError::InvalidItemIndex {
                index: 7,
                item_count: 2
            })
        );
    }

    #[test]
    fn scaling_one_item_is_linear_in_its_contribution() {
        let mut s = session();
        let base = s.set_serving(0, 1.0).unwrap();
        let doubled = s.set_serving(0, 2.0).unwrap();
        // Pizza contributes 285 kcal at 1.0; doubling adds exactly 285.
        assert_eq!(doubled.total_calories - base.total_calories, 285);
    }
}
