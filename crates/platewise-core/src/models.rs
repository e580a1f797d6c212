// ABOUTME: Data models for food predictions, nutrition profiles, and analysis results
// ABOUTME: Prediction, NutritionProfile, AliasMapping, DetectedItem, AggregateNutrition, AnalysisResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Core data models for the food analysis pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::serving;

/// One ranked label/confidence pair produced by the image classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    /// Raw classifier label
    pub label: String,
    /// Classifier confidence in [0, 1]
    pub confidence: f64,
}

impl Prediction {
    /// Create a new prediction
    #[must_use]
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Caution-food categories that incur a health-score penalty beyond the
/// base formula.
///
/// Declaration order is priority order: when more than one category could
/// apply to an item, the earliest variant wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CautionCategory {
    /// Sugary soft drinks (soda, cola)
    Soda,
    /// Deep-fried potato sides (fries, chips)
    Fries,
    /// Burgers
    Burger,
    /// Pizza
    Pizza,
    /// Desserts
    Dessert,
}

impl CautionCategory {
    /// Penalty points subtracted per serving of a food in this category
    #[must_use]
    pub const fn penalty(self) -> f64 {
        match self {
            Self::Soda => 10.0,
            Self::Fries => 8.0,
            Self::Burger => 5.0,
            Self::Pizza => 3.0,
            Self::Dessert => 7.0,
        }
    }

    /// Match a free-text label against the caution list by case-insensitive
    /// substring search, returning the highest-priority category that
    /// matches.
    ///
    /// Substring matching is fragile ("veggie burger" matches `Burger`);
    /// canonical store entries carry an explicit tag instead, and this
    /// fallback only applies to labels the store does not know.
    #[must_use]
    pub fn match_label(label: &str) -> Option<Self> {
        let lowered = label.to_lowercase();
        if lowered.contains("soda") || lowered.contains("cola") {
            Some(Self::Soda)
        } else if lowered.contains("fries") || lowered.contains("chips") {
            Some(Self::Fries)
        } else if lowered.contains("burger") {
            Some(Self::Burger)
        } else if lowered.contains("pizza") {
            Some(Self::Pizza)
        } else if lowered.contains("dessert") {
            Some(Self::Dessert)
        } else {
            None
        }
    }
}

/// Per-serving macros for one canonical food.
///
/// Owned by the nutrition reference store and read-only to the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionProfile {
    /// Calories per serving
    pub calories: u32,
    /// Protein grams per serving
    pub protein_g: f64,
    /// Carbohydrate grams per serving
    pub carbs_g: f64,
    /// Fat grams per serving
    pub fat_g: f64,
    /// Fiber grams per serving
    pub fiber_g: f64,
    /// Saturated fat grams per serving
    pub sat_fat_g: f64,
    /// Added sugar grams per serving
    pub added_sugar_g: f64,
}

impl NutritionProfile {
    /// Create a profile from per-serving values
    #[must_use]
    pub const fn new(
        calories: u32,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        fiber_g: f64,
        sat_fat_g: f64,
        added_sugar_g: f64,
    ) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
            sat_fat_g,
            added_sugar_g,
        }
    }

    /// The generic fallback profile returned when a label cannot be
    /// resolved to any canonical food. Resolution is total: this constant
    /// stands in rather than an error.
    #[must_use]
    pub const fn generic_fallback() -> Self {
        use crate::constants::fallback;
        Self::new(
            fallback::CALORIES,
            fallback::PROTEIN_G,
            fallback::CARBS_G,
            fallback::FAT_G,
            fallback::FIBER_G,
            fallback::SAT_FAT_G,
            fallback::ADDED_SUGAR_G,
        )
    }
}

/// A rule associating a raw classifier label (optionally within a cuisine
/// context) with a canonical food name.
///
/// Many-to-one: several raw labels and cuisine contexts may resolve to the
/// same canonical name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AliasMapping {
    /// Cuisine context this alias applies to; `None` means any cuisine
    pub cuisine_context: Option<String>,
    /// Raw classifier label (normalized form)
    pub raw_label: String,
    /// Canonical food name the alias resolves to
    pub canonical_name: String,
    /// Confidence boost used to rank competing aliases
    pub confidence_boost: f64,
}

/// One detected food item within an analysis.
///
/// `serving_multiplier` is the only field that changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedItem {
    /// Display label (normalized classifier label)
    pub label: String,
    /// Canonical food name, when the label resolved to a store entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_name: Option<String>,
    /// Classifier confidence, rounded to 3 decimal places
    pub confidence: f64,
    /// Serving multiplier in [0.25, 5], clamped on write
    #[serde(rename = "servings")]
    pub serving_multiplier: f64,
    /// Per-serving nutrition for the resolved food
    pub nutrition: NutritionProfile,
    /// Caution category, when the resolved food carries one
    #[serde(skip)]
    pub caution: Option<CautionCategory>,
}

impl DetectedItem {
    /// Create a detected item with the default serving multiplier.
    ///
    /// Confidence is rounded to 3 decimal places here, at the presentation
    /// boundary of the classifier; the label filter upstream works on the
    /// raw values.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        canonical_name: Option<String>,
        confidence: f64,
        nutrition: NutritionProfile,
        caution: Option<CautionCategory>,
    ) -> Self {
        Self {
            label: label.into(),
            canonical_name,
            confidence: (confidence * 1000.0).round() / 1000.0,
            serving_multiplier: serving::DEFAULT_MULTIPLIER,
            nutrition,
            caution,
        }
    }

    /// Set the serving multiplier, silently clamping to [0.25, 5].
    pub fn set_serving_multiplier(&mut self, value: f64) {
        self.serving_multiplier = value.clamp(serving::MIN_MULTIPLIER, serving::MAX_MULTIPLIER);
    }

    /// Caution category for penalty purposes: the store tag when present,
    /// otherwise a substring match on the display label.
    #[must_use]
    pub fn effective_caution(&self) -> Option<CautionCategory> {
        self.caution
            .or_else(|| CautionCategory::match_label(&self.label))
    }
}

/// Sum of all detected items' nutrition, scaled by their serving
/// multipliers.
///
/// Fully derived: always recomputed from the current items, never updated
/// incrementally, so repeated serving edits cannot accumulate drift.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregateNutrition {
    /// Total calories (unrounded; rounding happens at output boundaries)
    pub calories: f64,
    /// Total protein grams
    pub protein_g: f64,
    /// Total carbohydrate grams
    pub carbs_g: f64,
    /// Total fat grams
    pub fat_g: f64,
    /// Total fiber grams
    pub fiber_g: f64,
    /// Total saturated fat grams
    pub sat_fat_g: f64,
    /// Total added sugar grams
    pub added_sugar_g: f64,
}

impl AggregateNutrition {
    /// Accumulate one profile scaled by a serving multiplier
    pub fn add_scaled(&mut self, profile: &NutritionProfile, multiplier: f64) {
        self.calories += f64::from(profile.calories) * multiplier;
        self.protein_g += profile.protein_g * multiplier;
        self.carbs_g += profile.carbs_g * multiplier;
        self.fat_g += profile.fat_g * multiplier;
        self.fiber_g += profile.fiber_g * multiplier;
        self.sat_fat_g += profile.sat_fat_g * multiplier;
        self.added_sugar_g += profile.added_sugar_g * multiplier;
    }
}

/// Immutable analysis snapshot returned per computation.
///
/// The serving adjuster produces a new `AnalysisResult` on every mutation
/// rather than mutating an old one in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Handle for follow-up serving adjustments against this analysis
    pub analysis_id: Uuid,
    /// Total calories across all items, rounded at this output boundary
    pub total_calories: i64,
    /// Health score in [0, 100]
    pub health_score: u8,
    /// Detected items (1 to 3)
    pub items: Vec<DetectedItem>,
    /// Guidance strings derived from the aggregate nutrition
    pub tips: Vec<String>,
}
