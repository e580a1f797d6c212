// ABOUTME: Health score formula plus caution-food penalties with clamp-and-round last
// ABOUTME: Single shared implementation so server responses and live recompute cannot drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Health score calculation.
//!
//! Every caller - the analyze endpoint and the serving-adjustment
//! recompute - goes through this one function; the formula exists nowhere
//! else in the repository.

use platewise_core::models::{AggregateNutrition, DetectedItem};

use crate::config::ScoringConfig;
use crate::constants::scoring;

/// Compute the 0-100 health score for a meal.
///
/// The base formula is evaluated in floating point:
///
/// ```text
/// score = 100 - 0.02 * max(0, calories - 500)
///             - 1.2 * sat_fat_g - 0.2 * added_sugar_g
///             + 0.8 * fiber_g   + 0.5 * protein_g
/// ```
///
/// Then each item's caution penalty (scaled by that item's serving
/// multiplier, single highest-priority category per item) is subtracted
/// from the already-computed base. Clamping to [0, 100] and rounding
/// half-up happen last; the order matters and is observable near the
/// bounds.
#[must_use]
pub fn calculate_health_score(
    totals: &AggregateNutrition,
    items: &[DetectedItem],
    config: &ScoringConfig,
) -> u8 {
    let excess_calories = (totals.calories - config.calorie_budget).max(0.0);

    let base = scoring::BASE_SCORE - config.excess_calorie_weight * excess_calories
        - config.sat_fat_weight * totals.sat_fat_g
        - config.added_sugar_weight * totals.added_sugar_g
        + config.fiber_weight * totals.fiber_g
        + config.protein_weight * totals.protein_g;

    let penalty: f64 = items
        .iter()
        .filter_map(|item| {
            item.effective_caution()
                .map(|c| c.penalty() * item.serving_multiplier)
        })
        .sum();

    let clamped = (base - penalty).clamp(scoring::MIN_SCORE, scoring::MAX_SCORE);
    // round() is half-away-from-zero, which equals half-up on [0, 100].
    clamped.round() as u8
}
