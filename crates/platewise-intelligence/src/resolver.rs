// ABOUTME: Canonical food resolution with synonym and regional-cuisine aliasing
// ABOUTME: Total and deterministic - every label yields a profile, same input same output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Canonical resolver for raw classifier labels.
//!
//! Resolution must be *total* (always produces a profile) and
//! *deterministic* (same inputs always give the same output): the UI
//! recomputes scores live, and any nondeterminism would flicker. The
//! tie-break between competing aliases (highest boost, then ascending
//! lexical order of cuisine context, unscoped aliases last) is a documented
//! design choice, not magic - tests rely on it.

use std::sync::Arc;

use platewise_core::models::{AliasMapping, CautionCategory, NutritionProfile};
use platewise_core::store::NutritionStore;
use tracing::debug;

/// Flat synonym table applied when no alias mapping matches.
///
/// Maps common classifier phrasings onto canonical names before the direct
/// store lookup.
const SYNONYMS: &[(&str, &str)] = &[
    // Fries variations
    ("fries", "french fries"),
    ("chips", "french fries"),
    ("potato fries", "french fries"),
    ("fried potatoes", "french fries"),
    // Soda variations
    ("cola", "soda"),
    ("coke", "soda"),
    ("pepsi", "soda"),
    ("soft drink", "soda"),
    ("carbonated drink", "soda"),
    // Burger variations
    ("hamburger", "burger"),
    ("cheeseburger", "burger"),
    ("beefburger", "burger"),
    // Salad variations
    ("salad greens", "salad"),
    ("green salad", "salad"),
    ("mixed salad", "salad"),
    ("garden salad", "salad"),
    ("tossed salad", "salad"),
    // Rice variations
    ("white rice", "rice"),
    ("steamed rice", "rice"),
    ("fried rice", "rice"),
    ("rice bowl", "rice"),
    // Chicken variations
    ("grilled chicken", "chicken breast"),
    ("chicken fillet", "chicken breast"),
    ("roasted chicken", "chicken breast"),
    // Pizza variations
    ("pizza slice", "pizza"),
    ("cheese pizza", "pizza"),
    ("pepperoni pizza", "pizza"),
    // Sandwich variations
    ("sub", "sandwich"),
    ("hoagie", "sandwich"),
    ("panini", "sandwich"),
    // Pasta variations
    ("spaghetti", "pasta"),
    ("noodles", "pasta"),
    ("linguine", "pasta"),
    ("penne", "pasta"),
    // Fruit variations
    ("apples", "apple"),
    ("bananas", "banana"),
    ("oranges", "orange"),
    // Beverage variations
    ("coffee cup", "coffee"),
    ("espresso", "coffee"),
    ("latte", "coffee"),
];

/// Outcome of resolving one raw label.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Canonical name, when an alias or store entry determined one
    pub canonical_name: Option<String>,
    /// Per-serving nutrition (store entry or the generic fallback)
    pub nutrition: NutritionProfile,
    /// Caution tag carried by the resolved store entry
    pub caution: Option<CautionCategory>,
}

/// Resolver over a shared nutrition reference store.
pub struct CanonicalResolver {
    store: Arc<dyn NutritionStore>,
}

impl CanonicalResolver {
    /// Create a resolver reading from the given store.
    #[must_use]
    pub fn new(store: Arc<dyn NutritionStore>) -> Self {
        Self { store }
    }

    /// Resolve one raw label to a nutrition profile. Never fails: an
    /// unresolvable label yields the generic fallback profile.
    ///
    /// Steps, first match wins: normalize; cuisine-scoped alias lookup;
    /// any-cuisine alias lookup; flat synonym substitution; direct store
    /// lookup; generic fallback.
    #[must_use]
    pub fn resolve(&self, raw_label: &str, cuisine_context: Option<&str>) -> Resolution {
        let normalized = raw_label.trim().to_lowercase();

        let canonical = cuisine_context
            .and_then(|cuisine| {
                Self::best_alias(self.store.lookup_aliases(&normalized, Some(cuisine)))
            })
            .or_else(|| Self::best_alias(self.store.lookup_aliases(&normalized, None)))
            .or_else(|| {
                SYNONYMS
                    .iter()
                    .find(|(from, _)| *from == normalized)
                    .map(|(_, to)| (*to).to_owned())
            })
            .unwrap_or_else(|| normalized.clone());

        self.store.lookup_by_canonical_name(&canonical).map_or_else(
            || {
                debug!(label = %normalized, canonical = %canonical, "unresolved label, using generic fallback");
                Resolution {
                    // A matched alias fixes the canonical name even when the
                    // store has no entry for it; a plain miss leaves it unset.
                    canonical_name: (canonical != normalized).then(|| canonical.clone()),
                    nutrition: NutritionProfile::generic_fallback(),
                    caution: None,
                }
            },
            |record| Resolution {
                canonical_name: Some(record.canonical_name),
                nutrition: record.nutrition,
                caution: record.caution,
            },
        )
    }

    /// Pick the winning alias: highest `confidence_boost`, ties broken by
    /// ascending lexical order of cuisine context, unscoped aliases last.
    fn best_alias(mut candidates: Vec<AliasMapping>) -> Option<String> {
        candidates.sort_by(|a, b| {
            b.confidence_boost
                .total_cmp(&a.confidence_boost)
                .then_with(|| match (&a.cuisine_context, &b.cuisine_context) {
                    (Some(x), Some(y)) => x.cmp(y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
        });
        candidates.into_iter().next().map(|a| a.canonical_name)
    }
}
