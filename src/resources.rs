// ABOUTME: Shared server state constructed once at startup and injected into handlers
// ABOUTME: Holds the classifier, analyzer, nutrition store, session registry, and database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Shared server resources.

use std::sync::Arc;

use platewise_core::store::NutritionStore;
use platewise_intelligence::MealAnalyzer;
use platewise_providers::Classifier;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::sessions::SessionRegistry;

/// Everything route handlers need, built once and shared via `Arc`.
pub struct ServerResources {
    /// Runtime configuration
    pub config: ServerConfig,
    /// Persistence layer
    pub database: Database,
    /// The image classifier
    pub classifier: Arc<dyn Classifier>,
    /// The analysis pipeline
    pub analyzer: MealAnalyzer,
    /// Nutrition reference store, shared with the analyzer
    pub store: Arc<dyn NutritionStore>,
    /// Live analysis sessions awaiting serving adjustments
    pub sessions: SessionRegistry,
}

impl ServerResources {
    /// Assemble server resources. The analyzer and session registry are
    /// derived here so every caller gets a consistently wired set.
    #[must_use]
    pub fn new(
        config: ServerConfig,
        database: Database,
        classifier: Arc<dyn Classifier>,
        store: Arc<dyn NutritionStore>,
    ) -> Self {
        let analyzer = MealAnalyzer::new(Arc::clone(&store));
        let sessions = SessionRegistry::new(config.session_capacity);
        Self {
            config,
            database,
            classifier,
            analyzer,
            store,
            sessions,
        }
    }
}
