// ABOUTME: Greedy selector stage: ranks candidates by fit score and admits them under a soft cap
// ABOUTME: Stable ordering keeps selections reproducible for identical catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! # Greedy Selection
//!
//! Candidates are scored in isolation against zero committed calories, even
//! when the caller composes a meal on top of calories already eaten. Only the
//! macro constraint filter sees the committed amount.

use super::scorer::score_serving;
use crate::serving::resolve_serving;
use nutri_core::models::Product;
use tracing::debug;

/// Candidates at or below this score are never selected
pub const MIN_SELECTION_SCORE: f64 = 0.3;
/// Only the best `max_items x` this many candidates are considered
pub const CANDIDATE_POOL_MULTIPLIER: usize = 2;
/// Running serving total may not exceed the target times this ratio
pub const SELECTION_CALORIE_CAP_RATIO: f64 = 1.1;

/// A product admitted by the selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredProduct<'a> {
    /// Catalog product
    pub product: &'a Product,
    /// Fit score against zero committed calories
    pub score: f64,
    /// Calories of one full serving
    pub serving_calories: f64,
}

/// Rank `candidates` and admit up to `max_items` of them
///
/// Output is in descending score order; ties keep catalog order.
#[must_use]
pub fn select_candidates<'a>(
    candidates: &[&'a Product],
    target_calories: f64,
    max_items: usize,
) -> Vec<ScoredProduct<'a>> {
    let mut ranked: Vec<ScoredProduct<'a>> = candidates
        .iter()
        .copied()
        .filter_map(|product| {
            let serving = resolve_serving(product)?;
            let score = score_serving(&serving, target_calories, 0.0);
            (score > MIN_SELECTION_SCORE).then_some(ScoredProduct {
                product,
                score,
                serving_calories: serving.calories,
            })
        })
        .collect();

    // Vec::sort_by is stable
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let calorie_cap = target_calories * SELECTION_CALORIE_CAP_RATIO;
    let mut running_total = 0.0;
    let mut admitted = Vec::with_capacity(max_items);

    for candidate in ranked
        .into_iter()
        .take(max_items.saturating_mul(CANDIDATE_POOL_MULTIPLIER))
    {
        if admitted.len() >= max_items {
            break;
        }
        if running_total + candidate.serving_calories <= calorie_cap {
            running_total += candidate.serving_calories;
            admitted.push(candidate);
        } else {
            debug!(
                barcode = %candidate.product.barcode,
                score = candidate.score,
                "candidate skipped by selection calorie cap"
            );
        }
    }

    admitted
}
