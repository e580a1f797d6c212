// ABOUTME: Food analysis rules pipeline: label filtering, resolution, scoring, and tips
// ABOUTME: Pure, synchronous, deterministic; the only nontrivial logic in the repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

#![deny(unsafe_code)]

//! # Platewise Intelligence
//!
//! The rules pipeline that turns ranked classifier predictions into a
//! bounded, deterministic nutrition summary and a 0-100 health score:
//!
//! 1. **label filter** - reduces raw top-K predictions to a small
//!    multi-label set;
//! 2. **resolver** - maps raw labels to canonical food identities with
//!    synonym and regional-cuisine aliasing;
//! 3. **aggregator** - scales per-serving macros by serving multipliers and
//!    sums into meal totals;
//! 4. **health score** - applies the scoring formula plus caution-food
//!    penalties;
//! 5. **tips** - derives guidance strings from the totals;
//! 6. **session** - lets a caller adjust one item's serving size and
//!    atomically re-derive steps 3-5.
//!
//! The whole chain is pure and synchronous; its only reads go through the
//! [`platewise_core::store::NutritionStore`] trait. Determinism matters:
//! callers recompute scores live on every serving edit, and any
//! nondeterminism would cause visibly flickering results.

/// Full-pipeline entry point
pub mod analyzer;

/// Pure nutrition summation over detected items
pub mod aggregator;

/// Pipeline configuration with defaults wired to named constants
pub mod config;

/// Scoring weights, penalties, and tip thresholds
pub mod constants;

/// Health score formula and caution-food penalties
pub mod health_score;

/// Multi-label selection from ranked predictions
pub mod label_filter;

/// Canonical food resolution with synonym and cuisine aliasing
pub mod resolver;

/// Serving-adjustment session over an analysis
pub mod session;

/// Guidance tip generation from aggregate nutrition
pub mod tips;

pub use aggregator::aggregate;
pub use analyzer::MealAnalyzer;
pub use config::{AnalysisConfig, FilterConfig, ScoringConfig, TipThresholds};
pub use health_score::calculate_health_score;
pub use label_filter::filter_predictions;
pub use resolver::{CanonicalResolver, Resolution};
pub use session::AnalysisSession;
pub use tips::generate_tips;
