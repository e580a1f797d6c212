// ABOUTME: Bounded in-memory registry of live analysis sessions keyed by analysis id
// ABOUTME: LRU-evicted so unbounded analyze traffic cannot exhaust memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Analysis session registry.
//!
//! Analyses stay adjustable after the response is sent: the registry holds
//! each [`AnalysisSession`] until capacity pressure evicts it. Eviction is
//! least-recently-used, so the sessions a client is actively adjusting
//! survive longest. An evicted analysis answers serving adjustments with
//! not-found; the client re-analyzes.

use std::num::NonZeroUsize;

use lru::LruCache;
use tokio::sync::Mutex;
use uuid::Uuid;

use platewise_core::models::AnalysisResult;
use platewise_intelligence::AnalysisSession;

use crate::errors::AppError;

/// Bounded registry of live analysis sessions.
pub struct SessionRegistry {
    sessions: Mutex<LruCache<Uuid, AnalysisSession>>,
}

impl SessionRegistry {
    /// Create a registry holding at most `capacity` sessions. A zero
    /// capacity is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Register a fresh session, evicting the least-recently-used one when
    /// at capacity.
    pub async fn insert(&self, session: AnalysisSession) {
        let mut sessions = self.sessions.lock().await;
        sessions.put(session.analysis_id(), session);
    }

    /// Adjust one item's serving multiplier on a registered session and
    /// return the re-derived result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SessionNotFound`] when the analysis id is not
    /// registered (never was, or was evicted), and propagates
    /// [`AppError::Analysis`] for an out-of-range item index.
    pub async fn set_serving(
        &self,
        analysis_id: Uuid,
        index: usize,
        servings: f64,
    ) -> Result<AnalysisResult, AppError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(&analysis_id)
            .ok_or(AppError::SessionNotFound(analysis_id))?;
        Ok(session.set_serving(index, servings)?)
    }

    /// Number of sessions currently held.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Whether the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::models::{DetectedItem, NutritionProfile};
    use platewise_intelligence::AnalysisConfig;

    fn session() -> AnalysisSession {
        let items = vec![DetectedItem::new(
            "rice",
            Some("rice".to_owned()),
            0.8,
            NutritionProfile::new(205, 4.3, 45.0, 0.4, 0.6, 0.1, 0.0),
            None,
        )];
        AnalysisSession::new(Uuid::new_v4(), items, AnalysisConfig::default())
    }

    #[tokio::test]
    async fn adjusting_a_registered_session_works() {
        let registry = SessionRegistry::new(4);
        let s = session();
        let id = s.analysis_id();
        registry.insert(s).await;

        let result = registry.set_serving(id, 0, 2.0).await.unwrap();
        assert_eq!(result.total_calories, 410);
    }

    #[tokio::test]
    async fn unknown_analysis_is_not_found() {
        let registry = SessionRegistry::new(4);
        let err = registry.set_serving(Uuid::new_v4(), 0, 1.0).await;
        assert!(matches!(err, Err(AppError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn capacity_evicts_least_recently_used() {
        let registry = SessionRegistry::new(1);
        let first = session();
        let first_id = first.analysis_id();
        registry.insert(first).await;
        registry.insert(session()).await;

        assert_eq!(registry.len().await, 1);
        let err = registry.set_serving(first_id, 0, 1.0).await;
        assert!(matches!(err, Err(AppError::SessionNotFound(_))));
    }
}
