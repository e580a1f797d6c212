// ABOUTME: Multi-label selection from ranked classifier predictions
// ABOUTME: Asymmetric threshold - hard floor plus relative factor against the top score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Label filtering for multi-label food detection.

use platewise_core::errors::AnalysisError;
use platewise_core::models::Prediction;
use tracing::debug;

use crate::config::FilterConfig;

/// Reduce an ordered top-K prediction list to the kept multi-label set.
///
/// The threshold is `max(floor, p_main * relative)`: the hard floor avoids
/// accepting noise when the top score itself is low, while the relative
/// factor lets genuinely co-present foods (a salad beside a chicken breast)
/// qualify without beating a fixed absolute bar. Since the top prediction
/// always satisfies its own threshold, the result is never empty. Original
/// order is preserved and the set is truncated to `max_items`.
///
/// # Errors
///
/// Returns [`AnalysisError::NoDetection`] when the input list is empty.
pub fn filter_predictions(
    predictions: &[Prediction],
    config: &FilterConfig,
) -> Result<Vec<Prediction>, AnalysisError> {
    let top = predictions.first().ok_or(AnalysisError::NoDetection)?;

    let threshold = config
        .confidence_floor
        .max(top.confidence * config.relative_threshold);

    let kept: Vec<Prediction> = predictions
        .iter()
        .filter(|p| p.confidence >= threshold)
        .take(config.max_items)
        .cloned()
        .collect();

    debug!(
        threshold,
        total = predictions.len(),
        kept = kept.len(),
        top_label = %top.label,
        "filtered predictions"
    );

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(pairs: &[(&str, f64)]) -> Vec<Prediction> {
        pairs
            .iter()
            .map(|(l, c)| Prediction::new(*l, *c))
            .collect()
    }

    #[test]
    fn empty_input_is_no_detection() {
        let result = filter_predictions(&[], &FilterConfig::default());
        assert_eq!(result, Err(AnalysisError::NoDetection));
    }

    #[test]
    fn top_prediction_always_kept() {
        // Top score below the floor still keeps itself: p_main >= t always.
        let kept =
            filter_predictions(&preds(&[("toast", 0.05)]), &FilterConfig::default()).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].label, "toast");
    }

    #[test]
    fn relative_threshold_drops_weak_predictions() {
        let kept = filter_predictions(
            &preds(&[("pizza", 0.91), ("salad", 0.55), ("soda", 0.20)]),
            &FilterConfig::default(),
        )
        .unwrap();
        // t = max(0.15, 0.546) = 0.546; soda at 0.20 is dropped.
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].label, "pizza");
        assert_eq!(kept[1].label, "salad");
    }

    #[test]
    fn floor_applies_when_top_score_is_low() {
        // p_main = 0.2 -> relative bar is 0.12, but the floor is 0.15.
        let kept = filter_predictions(
            &preds(&[("soup", 0.20), ("bread", 0.14)]),
            &FilterConfig::default(),
        )
        .unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn truncates_to_max_items_in_original_order() {
        let kept = filter_predictions(
            &preds(&[
                ("rice", 0.30),
                ("chicken", 0.29),
                ("salad", 0.28),
                ("bread", 0.27),
                ("soup", 0.26),
            ]),
            &FilterConfig::default(),
        )
        .unwrap();
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[2].label, "salad");
    }
}
