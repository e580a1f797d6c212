// ABOUTME: Structured error types for the analysis pipeline and classifier boundary
// ABOUTME: AnalysisError for pipeline failures, ModelError for inference failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! # Error Types
//!
//! Errors are deliberately sparse: the resolver is total (an unresolvable
//! label falls back to a generic profile instead of failing) and all
//! clamping is silent normalization. The remaining failure modes are an
//! empty prediction list, an out-of-range item index on a serving edit, and
//! classifier inference failures.

use thiserror::Error;

/// Errors produced by the analysis pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The classifier returned no predictions; there is nothing to analyze.
    #[error("no food detected in image")]
    NoDetection,

    /// A serving adjustment referenced an item index outside the session.
    #[error("item index {index} out of range for {item_count} detected items")]
    InvalidItemIndex {
        /// Index requested by the caller
        index: usize,
        /// Number of items in the session
        item_count: usize,
    },
}

impl AnalysisError {
    /// Create an "invalid item index" error
    #[must_use]
    pub const fn invalid_item_index(index: usize, item_count: usize) -> Self {
        Self::InvalidItemIndex { index, item_count }
    }
}

/// Errors produced at the classifier boundary.
///
/// The classifier is a black box behind the `Classifier` trait; everything
/// it can do wrong is reported through this type.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Inference ran but failed.
    #[error("inference failed: {details}")]
    InferenceFailed {
        /// Details about the failure
        details: String,
    },

    /// The model is not loaded or otherwise unavailable.
    #[error("model unavailable: {details}")]
    Unavailable {
        /// Details about why the model cannot serve requests
        details: String,
    },
}

impl ModelError {
    /// Create an "inference failed" error
    #[must_use]
    pub fn inference_failed(details: impl Into<String>) -> Self {
        Self::InferenceFailed {
            details: details.into(),
        }
    }

    /// Create an "unavailable" error
    #[must_use]
    pub fn unavailable(details: impl Into<String>) -> Self {
        Self::Unavailable {
            details: details.into(),
        }
    }
}
