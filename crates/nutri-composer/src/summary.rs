// ABOUTME: Meal summary with macro totals, energy split, and tolerance band check
// ABOUTME: Read-only view over a composed meal for display and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use nutri_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutri_core::models::{MacroBreakdown, Meal};
use serde::{Deserialize, Serialize};

/// Macronutrient percentage breakdown of macro energy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein as percentage of macro energy
    pub protein_percent: f64,
    /// Carbohydrates as percentage of macro energy
    pub carbs_percent: f64,
    /// Fat as percentage of macro energy
    pub fat_percent: f64,
}

/// Totals and checks for one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Number of items
    pub item_count: usize,
    /// Items that were scaled down
    pub scaled_items: usize,
    /// Requested calories
    pub target_calories: f64,
    /// Sum of item calories
    pub actual_calories: f64,
    /// `actual - target`
    pub deviation_calories: f64,
    /// Whether actual calories lie in `[target x (1 - tol), target x (1 + tol)]`
    pub within_tolerance: bool,
    /// Summed macros
    pub macros: MacroBreakdown,
    /// Share of macro energy per macro
    pub macro_percentages: MacroPercentages,
}

/// Summarize `meal` against a tolerance band of `tolerance`
#[must_use]
pub fn summarize_meal(meal: &Meal, tolerance: f64) -> MealSummary {
    let macros = meal.total_macros();
    let target = meal.target_calories();
    let actual = meal.actual_calories();

    let protein_kcal = macros.protein_g * KCAL_PER_G_PROTEIN;
    let carbs_kcal = macros.carbs_g * KCAL_PER_G_CARBS;
    let fat_kcal = macros.fat_g * KCAL_PER_G_FAT;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

    let macro_percentages = if total_kcal > 0.0 {
        MacroPercentages {
            protein_percent: protein_kcal / total_kcal * 100.0,
            carbs_percent: carbs_kcal / total_kcal * 100.0,
            fat_percent: fat_kcal / total_kcal * 100.0,
        }
    } else {
        MacroPercentages::default()
    };

    MealSummary {
        item_count: meal.items().len(),
        scaled_items: meal
            .items()
            .iter()
            .filter(|item| item.scale_factor.is_some())
            .count(),
        target_calories: target,
        actual_calories: actual,
        deviation_calories: actual - target,
        within_tolerance: actual >= target * (1.0 - tolerance)
            && actual <= target * (1.0 + tolerance),
        macros,
        macro_percentages,
    }
}
