// ABOUTME: Guidance tip generation from aggregate nutrition totals
// ABOUTME: Fixed rule order, independently appendable, zero to three tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Tip generation.

use platewise_core::models::AggregateNutrition;

use crate::config::TipThresholds;
use crate::constants::tips;

/// Derive guidance strings from the aggregate nutrition.
///
/// Rules are evaluated in fixed order and are not mutually exclusive;
/// output order matches rule order.
#[must_use]
pub fn generate_tips(totals: &AggregateNutrition, thresholds: &TipThresholds) -> Vec<String> {
    let mut out = Vec::new();

    if totals.added_sugar_g >= thresholds.sugar_high_g {
        out.push(tips::SUGAR_TIP.to_owned());
    }
    if totals.fiber_g < thresholds.fiber_low_g {
        out.push(tips::FIBER_TIP.to_owned());
    }
    if totals.protein_g < thresholds.protein_low_g {
        out.push(tips::PROTEIN_TIP.to_owned());
    }

    out
}
