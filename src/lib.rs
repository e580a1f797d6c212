// ABOUTME: Platewise server library - HTTP surface over the analysis pipeline
// ABOUTME: Wires configuration, logging, persistence, and routes around the workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

#![deny(unsafe_code)]

//! # Platewise Server
//!
//! Food image analysis API. A request carries a base64 image; a classifier
//! produces ranked label predictions; the rules pipeline filters them,
//! resolves each label to a canonical food with a nutrition profile,
//! aggregates totals, scores the meal, and generates tips. Results stay
//! live in a bounded session registry so serving sizes can be adjusted
//! after the fact.
//!
//! The heavy lifting lives in the workspace crates:
//! - `platewise-core`: domain models, errors, the nutrition store
//! - `platewise-intelligence`: the analysis pipeline and scoring rules
//! - `platewise-providers`: the `Classifier` boundary and implementations

/// Server configuration from environment variables
pub mod config;
/// `SQLite` persistence for inferences, meals, and feedback
pub mod database;
/// Unified application error type with HTTP response mapping
pub mod errors;
/// Structured logging configuration
pub mod logging;
/// Request and response payloads for the HTTP API
pub mod models;
/// Shared server state injected into route handlers
pub mod resources;
/// HTTP route handlers organized by domain
pub mod routes;
/// Bounded in-memory registry of live analysis sessions
pub mod sessions;

pub use config::ServerConfig;
pub use errors::AppError;
pub use resources::ServerResources;
