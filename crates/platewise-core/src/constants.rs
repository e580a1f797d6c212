// ABOUTME: Application-wide constants for detection limits, serving bounds, and fallbacks
// ABOUTME: Single source of truth so the pipeline, routes, and tests never drift apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Domain constants shared across the workspace.

/// Detection and multi-label selection limits
pub mod detection {
    /// Maximum number of ranked predictions requested from the classifier
    pub const TOP_K: usize = 5;

    /// Maximum number of items kept after multi-label filtering
    pub const MAX_KEPT_ITEMS: usize = 3;

    /// Hard confidence floor; predictions below this never qualify
    pub const CONFIDENCE_FLOOR: f64 = 0.15;

    /// Relative threshold factor applied to the top prediction's confidence
    pub const RELATIVE_THRESHOLD: f64 = 0.6;
}

/// Serving multiplier bounds (clamped on write, never rejected)
pub mod serving {
    /// Smallest accepted serving multiplier
    pub const MIN_MULTIPLIER: f64 = 0.25;

    /// Largest accepted serving multiplier
    pub const MAX_MULTIPLIER: f64 = 5.0;

    /// Multiplier assigned to every item at analysis time
    pub const DEFAULT_MULTIPLIER: f64 = 1.0;
}

/// Generic fallback nutrition values used when a label cannot be resolved.
///
/// An unresolved label must never abort the pipeline; these values stand in
/// for one serving of an unknown food.
pub mod fallback {
    /// Fallback calories per serving
    pub const CALORIES: u32 = 250;
    /// Fallback protein grams per serving
    pub const PROTEIN_G: f64 = 6.0;
    /// Fallback carbohydrate grams per serving
    pub const CARBS_G: f64 = 30.0;
    /// Fallback fat grams per serving
    pub const FAT_G: f64 = 9.0;
    /// Fallback fiber grams per serving
    pub const FIBER_G: f64 = 2.0;
    /// Fallback saturated fat grams per serving
    pub const SAT_FAT_G: f64 = 2.0;
    /// Fallback added sugar grams per serving
    pub const ADDED_SUGAR_G: f64 = 2.0;
}

/// Upload validation limits for the analyze endpoint
pub mod upload {
    /// Maximum accepted image payload in bytes (8 MiB)
    pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;

    /// Accepted image content types
    pub const ACCEPTED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
}

/// Service identity used in logging and health responses
pub mod service {
    /// Canonical service name
    pub const NAME: &str = "platewise-server";
}
