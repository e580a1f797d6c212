// ABOUTME: Core types and constants for the Platewise food analysis platform
// ABOUTME: Foundation crate with data models, error handling, and the nutrition reference store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

#![deny(unsafe_code)]

//! # Platewise Core
//!
//! Foundation crate providing shared types for the Platewise food analysis
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Data models for predictions, nutrition profiles, and analysis results
//! - **errors**: Structured error types (`AnalysisError`, `ModelError`)
//! - **constants**: Application-wide constants organized by domain
//! - **store**: The nutrition reference store interface and its in-memory backing

/// Structured error types for analysis and inference failures
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (predictions, nutrition profiles, detected items, results)
pub mod models;

/// Nutrition reference store interface and in-memory implementation
pub mod store;

pub use errors::{AnalysisError, ModelError};
pub use models::{
    AggregateNutrition, AliasMapping, AnalysisResult, CautionCategory, DetectedItem,
    NutritionProfile, Prediction,
};
pub use store::{NutritionStore, StaticNutritionStore};
