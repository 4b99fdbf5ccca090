// ABOUTME: Fit scorer stage: desirability of one serving given the remaining calorie budget
// ABOUTME: Fixed coefficients keep meal outputs stable across releases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! # Fit Scoring
//!
//! ```text
//! score = 0.5
//!       + 0.3 x max(0, 1 - |serving_kcal - remaining| / max(remaining, 1))   if remaining > 0
//!       - 0.3                                                              if remaining <= 0
//!       + 0.1 if protein > 0, + 0.05 if carbs > 0, + 0.05 if fat > 0
//! clamped to [0, 1]; 0.0 exactly when the serving cannot be resolved
//! ```
//!
//! The coefficients are part of the output contract. Changing any of them
//! changes which meals are produced for the same catalog.

use crate::serving::{resolve_serving, ServingInfo};
use nutri_core::models::Product;

/// Starting score before adjustments
pub const BASELINE_SCORE: f64 = 0.5;
/// Weight of the relative calorie fit
pub const CALORIE_FIT_WEIGHT: f64 = 0.3;
/// Flat penalty once the budget is used up
pub const OVER_TARGET_PENALTY: f64 = 0.3;
/// Bonus when the serving has protein
pub const PROTEIN_BONUS: f64 = 0.1;
/// Bonus when the serving has carbohydrates
pub const CARBS_BONUS: f64 = 0.05;
/// Bonus when the serving has fat
pub const FAT_BONUS: f64 = 0.05;

/// Score a product; unresolvable servings score exactly 0.0
#[must_use]
pub fn score_product(product: &Product, target_calories: f64, committed_calories: f64) -> f64 {
    resolve_serving(product).map_or(0.0, |serving| {
        score_serving(&serving, target_calories, committed_calories)
    })
}

/// Score an already resolved serving
#[must_use]
pub fn score_serving(serving: &ServingInfo, target_calories: f64, committed_calories: f64) -> f64 {
    let remaining = target_calories - committed_calories;
    let mut score = BASELINE_SCORE;

    if remaining > 0.0 {
        let fit = (1.0 - (serving.calories - remaining).abs() / remaining.max(1.0)).max(0.0);
        score += CALORIE_FIT_WEIGHT * fit;
    } else {
        score -= OVER_TARGET_PENALTY;
    }

    if serving.macros.protein_g > 0.0 {
        score += PROTEIN_BONUS;
    }
    if serving.macros.carbs_g > 0.0 {
        score += CARBS_BONUS;
    }
    if serving.macros.fat_g > 0.0 {
        score += FAT_BONUS;
    }

    score.clamp(0.0, 1.0)
}
