// ABOUTME: Classifier capability - trait boundary for the black-box image model
// ABOUTME: Injected once at startup and shared by reference, never re-entered mid-inference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

#![deny(unsafe_code)]

//! # Platewise Providers
//!
//! The image classifier is an external collaborator: given image bytes it
//! returns an ordered sequence of up to 5 label/confidence pairs, or a
//! [`ModelError`] on inference failure. The pipeline never receives raw
//! images. This crate defines the [`Classifier`] trait boundary and ships a
//! deterministic synthetic implementation for development and testing
//! (feature `provider-synthetic`, on by default in the server).

use async_trait::async_trait;
use platewise_core::errors::ModelError;
use platewise_core::models::Prediction;

/// Deterministic synthetic classifier for development and testing
#[cfg(feature = "provider-synthetic")]
pub mod synthetic;

#[cfg(feature = "provider-synthetic")]
pub use synthetic::SyntheticClassifier;

/// Capability boundary for the image classifier.
///
/// Implementations are constructed once at startup and shared via `Arc`;
/// they must be safe to call concurrently for independent requests.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Run inference over raw image bytes, returning ranked predictions in
    /// descending confidence order, at most 5.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when inference fails or the model is
    /// unavailable.
    async fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, ModelError>;

    /// Identifier of the underlying model, recorded with persisted
    /// inferences.
    fn model_name(&self) -> &str;
}
