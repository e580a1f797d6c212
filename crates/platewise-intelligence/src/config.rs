// ABOUTME: Pipeline configuration structs with defaults wired to named constants
// ABOUTME: FilterConfig, ScoringConfig, TipThresholds bundled into AnalysisConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Configuration for the analysis pipeline.
//!
//! Every knob defaults to the documented constants; tests and deployments
//! can override individual pieces without touching the others.

use platewise_core::constants::detection;
use serde::{Deserialize, Serialize};

use crate::constants::{scoring, tips};

/// Multi-label selection thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Hard confidence floor; avoids accepting noise when the top score
    /// itself is low
    pub confidence_floor: f64,
    /// Relative factor against the top prediction's confidence; lets
    /// genuinely co-present foods qualify without a fixed absolute bar
    pub relative_threshold: f64,
    /// Maximum number of predictions kept
    pub max_items: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            confidence_floor: detection::CONFIDENCE_FLOOR,
            relative_threshold: detection::RELATIVE_THRESHOLD,
            max_items: detection::MAX_KEPT_ITEMS,
        }
    }
}

/// Health score formula weights.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Calories under this budget incur no penalty
    pub calorie_budget: f64,
    /// Penalty per calorie over budget
    pub excess_calorie_weight: f64,
    /// Penalty per gram of saturated fat
    pub sat_fat_weight: f64,
    /// Penalty per gram of added sugar
    pub added_sugar_weight: f64,
    /// Bonus per gram of fiber
    pub fiber_weight: f64,
    /// Bonus per gram of protein
    pub protein_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            calorie_budget: scoring::CALORIE_BUDGET,
            excess_calorie_weight: scoring::EXCESS_CALORIE_WEIGHT,
            sat_fat_weight: scoring::SAT_FAT_WEIGHT,
            added_sugar_weight: scoring::ADDED_SUGAR_WEIGHT,
            fiber_weight: scoring::FIBER_WEIGHT,
            protein_weight: scoring::PROTEIN_WEIGHT,
        }
    }
}

/// Thresholds that trigger guidance tips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipThresholds {
    /// Added sugar at or above this many grams triggers the sugar tip
    pub sugar_high_g: f64,
    /// Fiber below this many grams triggers the fiber tip
    pub fiber_low_g: f64,
    /// Protein below this many grams triggers the protein tip
    pub protein_low_g: f64,
}

impl Default for TipThresholds {
    fn default() -> Self {
        Self {
            sugar_high_g: tips::SUGAR_HIGH_G,
            fiber_low_g: tips::FIBER_LOW_G,
            protein_low_g: tips::PROTEIN_LOW_G,
        }
    }
}

/// Bundled configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Multi-label selection thresholds
    pub filter: FilterConfig,
    /// Health score formula weights
    pub scoring: ScoringConfig,
    /// Tip trigger thresholds
    pub tips: TipThresholds,
}
