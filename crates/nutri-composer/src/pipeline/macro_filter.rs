// ABOUTME: Macro constraint filter stage: rejects servings too large, too sugary, or too fatty
// ABOUTME: Thresholds are ratios of the remaining calorie budget, floored at 1 kcal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use crate::config::MacroLimits;
use crate::preferences::Preferences;
use crate::serving::{resolve_serving, ServingInfo};
use nutri_core::constants::energy::{KCAL_PER_G_FAT, KCAL_PER_G_SUGAR};
use nutri_core::models::Product;
use std::fmt;
use tracing::debug;

/// Why a serving failed the macro balance check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectionReason {
    /// Serving calories above the serving ratio of the remaining budget
    ServingTooLarge {
        /// Serving energy (kcal)
        calories: f64,
        /// Largest allowed serving energy (kcal)
        limit: f64,
    },
    /// Sugar energy above the sugar ratio of the remaining budget
    TooMuchSugar {
        /// Sugar energy (kcal)
        sugar_calories: f64,
        /// Largest allowed sugar energy (kcal)
        limit: f64,
    },
    /// Fat energy above the fat ratio of the remaining budget
    TooMuchFat {
        /// Fat energy (kcal)
        fat_calories: f64,
        /// Largest allowed fat energy (kcal)
        limit: f64,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServingTooLarge { calories, limit } => {
                write!(f, "serving of {calories:.0} kcal exceeds {limit:.0} kcal")
            }
            Self::TooMuchSugar {
                sugar_calories,
                limit,
            } => write!(f, "sugar energy {sugar_calories:.0} kcal exceeds {limit:.0} kcal"),
            Self::TooMuchFat {
                fat_calories,
                limit,
            } => write!(f, "fat energy {fat_calories:.0} kcal exceeds {limit:.0} kcal"),
        }
    }
}

/// Remaining calorie budget, floored at 1 kcal
#[must_use]
pub fn remaining_budget(target_calories: f64, committed_calories: f64) -> f64 {
    (target_calories - committed_calories).max(1.0)
}

/// Check one serving against the limits for a remaining budget
///
/// # Errors
///
/// Returns the first violated constraint, checked in the order serving size,
/// sugar, fat
pub fn check_macro_balance(
    serving: &ServingInfo,
    remaining: f64,
    limits: &MacroLimits,
) -> Result<(), RejectionReason> {
    let serving_limit = limits.max_serving_ratio * remaining;
    if serving.calories > serving_limit {
        return Err(RejectionReason::ServingTooLarge {
            calories: serving.calories,
            limit: serving_limit,
        });
    }

    let sugar_calories = serving.macros.sugars_g * KCAL_PER_G_SUGAR;
    let sugar_limit = limits.max_sugar_energy_ratio * remaining;
    if sugar_calories > sugar_limit {
        return Err(RejectionReason::TooMuchSugar {
            sugar_calories,
            limit: sugar_limit,
        });
    }

    let fat_calories = serving.macros.fat_g * KCAL_PER_G_FAT;
    let fat_limit = limits.max_fat_energy_ratio * remaining;
    if fat_calories > fat_limit {
        return Err(RejectionReason::TooMuchFat {
            fat_calories,
            limit: fat_limit,
        });
    }

    Ok(())
}

/// Keep products whose single serving fits the remaining budget's macro balance
///
/// Products without a resolvable serving are dropped silently. Limits come
/// from `preferences` when supplied, else the defaults.
#[must_use]
pub fn filter_by_macros<'a>(
    candidates: &[&'a Product],
    target_calories: f64,
    committed_calories: f64,
    preferences: Option<&dyn Preferences>,
) -> Vec<&'a Product> {
    let remaining = remaining_budget(target_calories, committed_calories);
    let limits = preferences.map_or_else(MacroLimits::default, |p| p.macro_limits());

    candidates
        .iter()
        .copied()
        .filter(|product| {
            let Some(serving) = resolve_serving(product) else {
                return false;
            };
            match check_macro_balance(&serving, remaining, &limits) {
                Ok(()) => true,
                Err(reason) => {
                    debug!(barcode = %product.barcode, %reason, "product rejected by macro constraints");
                    false
                }
            }
        })
        .collect()
}
