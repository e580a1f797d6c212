// ABOUTME: Pure nutrition summation over detected items scaled by serving multipliers
// ABOUTME: f64 accumulation with no internal rounding so recomputation never drifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Nutrition aggregation.

use platewise_core::models::{AggregateNutrition, DetectedItem};

/// Sum every item's per-serving nutrition scaled by its serving
/// multiplier.
///
/// Pure and order-independent. No rounding happens here; rounding belongs
/// to output boundaries only, so repeated recomputation after small serving
/// edits cannot accumulate drift.
#[must_use]
pub fn aggregate(items: &[DetectedItem]) -> AggregateNutrition {
    let mut totals = AggregateNutrition::default();
    for item in items {
        totals.add_scaled(&item.nutrition, item.serving_multiplier);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::models::NutritionProfile;

    fn item(label: &str, calories: u32, multiplier: f64) -> DetectedItem {
        let mut it = DetectedItem::new(
            label,
            None,
            0.9,
            NutritionProfile::new(calories, 10.0, 20.0, 5.0, 2.0, 1.0, 3.0),
            None,
        );
        it.set_serving_multiplier(multiplier);
        it
    }

    #[test]
    fn sums_scaled_by_multiplier() {
        let items = vec![item("a", 100, 1.0), item("b", 200, 2.0)];
        let totals = aggregate(&items);
        assert!((totals.calories - 500.0).abs() < f64::EPSILON);
        assert!((totals.protein_g - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn order_independent() {
        let forward = vec![item("a", 100, 1.5), item("b", 200, 0.5), item("c", 50, 3.0)];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(aggregate(&forward), aggregate(&reversed));
    }

    #[test]
    fn empty_items_sum_to_zero() {
        assert_eq!(aggregate(&[]), AggregateNutrition::default());
    }
}
