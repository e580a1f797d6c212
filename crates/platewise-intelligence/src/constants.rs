// ABOUTME: Named constants for the health score formula and tip thresholds
// ABOUTME: Keeps the scoring weights in one place so server and tests share one formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Scoring and tip constants.

/// Health score formula weights.
///
/// `score = 100 - 0.02*max(0, cal-500) - 1.2*sat_fat - 0.2*sugar
///          + 0.8*fiber + 0.5*protein`, penalties applied after, clamp and
/// round last.
pub mod scoring {
    /// Starting score before any adjustment
    pub const BASE_SCORE: f64 = 100.0;

    /// Calories under this budget incur no penalty
    pub const CALORIE_BUDGET: f64 = 500.0;

    /// Penalty per calorie over budget
    pub const EXCESS_CALORIE_WEIGHT: f64 = 0.02;

    /// Penalty per gram of saturated fat
    pub const SAT_FAT_WEIGHT: f64 = 1.2;

    /// Penalty per gram of added sugar
    pub const ADDED_SUGAR_WEIGHT: f64 = 0.2;

    /// Bonus per gram of fiber
    pub const FIBER_WEIGHT: f64 = 0.8;

    /// Bonus per gram of protein
    pub const PROTEIN_WEIGHT: f64 = 0.5;

    /// Lower clamp bound for the final score
    pub const MIN_SCORE: f64 = 0.0;

    /// Upper clamp bound for the final score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Thresholds that trigger guidance tips.
pub mod tips {
    /// Added sugar at or above this many grams triggers the sugar tip
    pub const SUGAR_HIGH_G: f64 = 20.0;

    /// Fiber below this many grams triggers the fiber tip
    pub const FIBER_LOW_G: f64 = 5.0;

    /// Protein below this many grams triggers the protein tip
    pub const PROTEIN_LOW_G: f64 = 15.0;

    /// Tip shown when added sugar is high
    pub const SUGAR_TIP: &str = "Swap sugary drinks for water or unsweetened tea.";

    /// Tip shown when fiber is low
    pub const FIBER_TIP: &str = "Add veggies or whole grains to increase fiber.";

    /// Tip shown when protein is low
    pub const PROTEIN_TIP: &str = "Add a lean protein for satiety.";
}
