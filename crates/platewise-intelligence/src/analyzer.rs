// ABOUTME: Full-pipeline entry point - predictions in, serving-adjustable session out
// ABOUTME: Wires label filter, resolver, and item construction over a shared store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Meal analyzer.

use std::sync::Arc;

use platewise_core::errors::AnalysisError;
use platewise_core::models::{DetectedItem, Prediction};
use platewise_core::store::NutritionStore;
use tracing::info;
use uuid::Uuid;

use crate::config::AnalysisConfig;
use crate::label_filter::filter_predictions;
use crate::resolver::CanonicalResolver;
use crate::session::AnalysisSession;

/// Analyzer running the full rules pipeline over classifier output.
///
/// Construct once and share by reference; analyses are independent and the
/// analyzer holds no per-request state, so concurrent use is safe.
pub struct MealAnalyzer {
    config: AnalysisConfig,
    resolver: CanonicalResolver,
}

impl MealAnalyzer {
    /// Create an analyzer with default configuration.
    #[must_use]
    pub fn new(store: Arc<dyn NutritionStore>) -> Self {
        Self::with_config(store, AnalysisConfig::default())
    }

    /// Create an analyzer with custom configuration.
    #[must_use]
    pub fn with_config(store: Arc<dyn NutritionStore>, config: AnalysisConfig) -> Self {
        Self {
            config,
            resolver: CanonicalResolver::new(store),
        }
    }

    /// Run filtering and resolution over ranked predictions, producing a
    /// session seeded with default serving multipliers.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoDetection`] when the prediction list is
    /// empty. Unresolvable labels are not errors; they fall back to the
    /// generic profile.
    pub fn analyze(
        &self,
        predictions: &[Prediction],
        cuisine_context: Option<&str>,
    ) -> Result<AnalysisSession, AnalysisError> {
        let kept = filter_predictions(predictions, &self.config.filter)?;

        let items: Vec<DetectedItem> = kept
            .iter()
            .map(|p| {
                let label = p.label.trim().to_lowercase();
                let resolution = self.resolver.resolve(&p.label, cuisine_context);
                DetectedItem::new(
                    label,
                    resolution.canonical_name,
                    p.confidence,
                    resolution.nutrition,
                    resolution.caution,
                )
            })
            .collect();

        let analysis_id = Uuid::new_v4();
        info!(
            %analysis_id,
            items = items.len(),
            cuisine = cuisine_context.unwrap_or("none"),
            "analysis pipeline complete"
        );

        Ok(AnalysisSession::new(
            analysis_id,
            items,
            self.config.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_core::store::StaticNutritionStore;

    fn analyzer() -> MealAnalyzer {
        MealAnalyzer::new(Arc::new(StaticNutritionStore::new()))
    }

    #[test]
    fn empty_predictions_fail_with_no_detection() {
        assert_eq!(
            analyzer().analyze(&[], None).map(|_| ()),
            Err(AnalysisError::NoDetection)
        );
    }

    #[test]
    fn kept_set_is_bounded_and_top_always_present() {
        let predictions = vec![
            Prediction::new("Pizza", 0.91),
            Prediction::new("salad", 0.85),
            Prediction::new("soda", 0.80),
            Prediction::new("burger", 0.75),
            Prediction::new("rice", 0.70),
        ];
        let session = analyzer().analyze(&predictions, None).unwrap();
        assert_eq!(session.items().len(), 3);
        assert_eq!(session.items()[0].label, "pizza");
    }

    #[test]
    fn unresolved_label_still_yields_an_item() {
        let session = analyzer()
            .analyze(&[Prediction::new("mystery casserole", 0.9)], None)
            .unwrap();
        let item = &session.items()[0];
        assert_eq!(item.canonical_name, None);
        assert_eq!(item.nutrition.calories, 250);
    }
}
