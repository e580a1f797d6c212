// ABOUTME: Nutrition reference store interface and the in-memory backing implementation
// ABOUTME: Keyed lookup of per-serving nutrition facts plus regional cuisine alias mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! # Nutrition Reference Store
//!
//! The pipeline reads nutrition facts and alias mappings through the
//! [`NutritionStore`] trait; any backing implementation (in-memory map,
//! external database) must satisfy the same read contract. The store is
//! read-only and thread-safe from the pipeline's perspective.

use serde::{Deserialize, Serialize};

use crate::models::{AliasMapping, CautionCategory, NutritionProfile};

/// One canonical food known to the reference store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    /// Canonical food name keying nutrition lookups
    pub canonical_name: String,
    /// Per-serving nutrition
    pub nutrition: NutritionProfile,
    /// Caution category, when this food incurs a score penalty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caution: Option<CautionCategory>,
}

/// Read contract for nutrition facts and alias mappings.
pub trait NutritionStore: Send + Sync {
    /// Look up a canonical food by name. Returns `None` when the store has
    /// no entry; callers fall back to the generic profile.
    fn lookup_by_canonical_name(&self, name: &str) -> Option<FoodRecord>;

    /// Return all alias mappings whose raw label matches. When a cuisine
    /// context is given, only aliases scoped to that cuisine are returned;
    /// otherwise aliases under every cuisine (including unscoped ones)
    /// match. Tie-breaking between candidates is the resolver's job.
    fn lookup_aliases(&self, raw_label: &str, cuisine_context: Option<&str>) -> Vec<AliasMapping>;

    /// Enumerate every known food, for the foods listing endpoint.
    fn all_foods(&self) -> Vec<FoodRecord>;
}

/// In-memory reference store seeded with the built-in nutrition table and
/// regional cuisine alias mappings.
pub struct StaticNutritionStore {
    foods: Vec<FoodRecord>,
    aliases: Vec<AliasMapping>,
}

impl Default for StaticNutritionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticNutritionStore {
    /// Build the store with the built-in seed data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            foods: seed_foods(),
            aliases: seed_aliases(),
        }
    }

    /// Build a store from explicit records, for tests and alternative seeds.
    #[must_use]
    pub fn with_data(foods: Vec<FoodRecord>, aliases: Vec<AliasMapping>) -> Self {
        Self { foods, aliases }
    }
}

impl NutritionStore for StaticNutritionStore {
    fn lookup_by_canonical_name(&self, name: &str) -> Option<FoodRecord> {
        self.foods
            .iter()
            .find(|f| f.canonical_name == name)
            .cloned()
    }

    fn lookup_aliases(&self, raw_label: &str, cuisine_context: Option<&str>) -> Vec<AliasMapping> {
        self.aliases
            .iter()
            .filter(|a| a.raw_label == raw_label)
            .filter(|a| match cuisine_context {
                Some(cuisine) => a.cuisine_context.as_deref() == Some(cuisine),
                None => true,
            })
            .cloned()
            .collect()
    }

    fn all_foods(&self) -> Vec<FoodRecord> {
        self.foods.clone()
    }
}

fn record(
    name: &str,
    nutrition: NutritionProfile,
    caution: Option<CautionCategory>,
) -> FoodRecord {
    FoodRecord {
        canonical_name: name.to_owned(),
        nutrition,
        caution,
    }
}

/// Built-in per-serving nutrition facts.
fn seed_foods() -> Vec<FoodRecord> {
    vec![
        record(
            "pizza",
            NutritionProfile::new(285, 12.0, 36.0, 10.0, 2.0, 4.0, 2.0),
            Some(CautionCategory::Pizza),
        ),
        record(
            "salad",
            NutritionProfile::new(150, 4.0, 10.0, 10.0, 3.0, 2.0, 1.0),
            None,
        ),
        record(
            "soda",
            NutritionProfile::new(150, 0.0, 39.0, 0.0, 0.0, 0.0, 39.0),
            Some(CautionCategory::Soda),
        ),
        record(
            "french fries",
            NutritionProfile::new(365, 4.0, 48.0, 17.0, 4.0, 3.0, 0.0),
            Some(CautionCategory::Fries),
        ),
        record(
            "burger",
            NutritionProfile::new(540, 31.0, 41.0, 27.0, 3.0, 10.0, 5.0),
            Some(CautionCategory::Burger),
        ),
        record(
            "chicken breast",
            NutritionProfile::new(231, 43.5, 0.0, 5.0, 0.0, 1.4, 0.0),
            None,
        ),
        record(
            "rice",
            NutritionProfile::new(205, 4.3, 45.0, 0.4, 0.6, 0.1, 0.0),
            None,
        ),
        record(
            "apple",
            NutritionProfile::new(95, 0.5, 25.0, 0.3, 4.4, 0.1, 19.0),
            None,
        ),
        record(
            "banana",
            NutritionProfile::new(105, 1.3, 27.0, 0.4, 3.1, 0.1, 14.0),
            None,
        ),
        record(
            "sandwich",
            NutritionProfile::new(350, 16.0, 40.0, 13.0, 3.0, 4.0, 4.0),
            None,
        ),
        record(
            "pasta",
            NutritionProfile::new(310, 11.0, 43.0, 10.0, 3.0, 2.0, 3.0),
            None,
        ),
        record(
            "orange",
            NutritionProfile::new(62, 1.2, 15.0, 0.2, 3.1, 0.0, 12.0),
            None,
        ),
        record(
            "coffee",
            NutritionProfile::new(5, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0),
            None,
        ),
        record(
            "dessert",
            NutritionProfile::new(400, 5.0, 55.0, 18.0, 1.0, 9.0, 35.0),
            Some(CautionCategory::Dessert),
        ),
    ]
}

fn alias(
    cuisine: Option<&str>,
    raw_label: &str,
    canonical_name: &str,
    confidence_boost: f64,
) -> AliasMapping {
    AliasMapping {
        cuisine_context: cuisine.map(str::to_owned),
        raw_label: raw_label.to_owned(),
        canonical_name: canonical_name.to_owned(),
        confidence_boost,
    }
}

/// Built-in regional cuisine alias mappings.
fn seed_aliases() -> Vec<AliasMapping> {
    vec![
        alias(Some("italian"), "noodles", "pasta", 0.3),
        alias(Some("italian"), "flatbread", "pizza", 0.2),
        alias(Some("american"), "flatbread", "sandwich", 0.2),
        alias(Some("american"), "pop", "soda", 0.25),
        alias(Some("british"), "chips", "french fries", 0.3),
        alias(Some("british"), "pudding", "dessert", 0.2),
        alias(Some("japanese"), "noodles", "pasta", 0.15),
        alias(None, "hot dog", "sandwich", 0.1),
    ]
}
