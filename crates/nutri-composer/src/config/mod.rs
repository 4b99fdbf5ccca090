// ABOUTME: Composer configuration: item budgets, calorie tolerances, macro limits, day splits
// ABOUTME: Supplied by the caller per invocation, validated at the boundary before composing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! Meal Composition Configuration
//!
//! Numeric knobs for the composition pipeline. Nothing here is global: every
//! entry point takes the configuration by reference, and the engine does not
//! re-validate it. Callers run [`ComposerConfig::validate`] once at the
//! boundary.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use nutri_core::models::MealType;
use serde::{Deserialize, Serialize};

/// Item budgets and calorie tolerances for one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposerConfig {
    /// Maximum items in a meal when flexibility is off
    pub max_items_per_meal: usize,
    /// Maximum items in a meal when flexibility is on
    pub max_items_flexible: usize,
    /// Tolerance band half-width (fraction of target) when flexibility is off
    pub calorie_tolerance_strict: f64,
    /// Tolerance band half-width (fraction of target) when flexibility is on
    pub calorie_tolerance_flexible: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_items_per_meal: 4,
            max_items_flexible: 6,
            calorie_tolerance_strict: 0.10,
            // Tighter than strict: flexible meals shrink the last item to land near target
            calorie_tolerance_flexible: 0.05,
        }
    }
}

impl ComposerConfig {
    /// Item budget for the given mode
    #[must_use]
    pub const fn max_items(&self, flexibility: bool) -> usize {
        if flexibility {
            self.max_items_flexible
        } else {
            self.max_items_per_meal
        }
    }

    /// Calorie tolerance for the given mode
    #[must_use]
    pub const fn tolerance(&self, flexibility: bool) -> f64 {
        if flexibility {
            self.calorie_tolerance_flexible
        } else {
            self.calorie_tolerance_strict
        }
    }

    /// Validate item budgets and tolerances
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if an item budget is zero or a
    /// tolerance is not a finite value in `[0, 1)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_items_per_meal", self.max_items_per_meal),
            ("max_items_flexible", self.max_items_flexible),
        ] {
            if value == 0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be at least 1"
                )));
            }
        }

        for (name, value) in [
            ("calorie_tolerance_strict", self.calorie_tolerance_strict),
            ("calorie_tolerance_flexible", self.calorie_tolerance_flexible),
        ] {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be in [0, 1), got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Macro balance thresholds applied by the macro constraint filter
///
/// Every ratio is relative to the remaining calorie budget of the meal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroLimits {
    /// Largest single serving, as a multiple of the remaining budget
    pub max_serving_ratio: f64,
    /// Largest sugar energy (4 kcal/g), as a fraction of the remaining budget
    pub max_sugar_energy_ratio: f64,
    /// Largest fat energy (9 kcal/g), as a fraction of the remaining budget
    pub max_fat_energy_ratio: f64,
}

impl Default for MacroLimits {
    fn default() -> Self {
        Self {
            max_serving_ratio: 1.5,
            max_sugar_energy_ratio: 0.30,
            max_fat_energy_ratio: 0.60,
        }
    }
}

impl MacroLimits {
    /// Element-wise tightest of two limit sets
    #[must_use]
    pub fn tightest(&self, other: &Self) -> Self {
        Self {
            max_serving_ratio: self.max_serving_ratio.min(other.max_serving_ratio),
            max_sugar_energy_ratio: self.max_sugar_energy_ratio.min(other.max_sugar_energy_ratio),
            max_fat_energy_ratio: self.max_fat_energy_ratio.min(other.max_fat_energy_ratio),
        }
    }

    /// Validate that every ratio is finite and positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a ratio is not a finite positive number
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_serving_ratio", self.max_serving_ratio),
            ("max_sugar_energy_ratio", self.max_sugar_energy_ratio),
            ("max_fat_energy_ratio", self.max_fat_energy_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Share of the daily calorie target given to each meal slot
///
/// Proportions must sum to 1.0 (within 0.01). A zero proportion skips the slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSplitConfig {
    /// Breakfast share of daily calories
    pub breakfast: f64,
    /// Lunch share of daily calories
    pub lunch: f64,
    /// Dinner share of daily calories
    pub dinner: f64,
    /// Snack share of daily calories
    pub snack: f64,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

impl MealSplitConfig {
    /// Share of daily calories for one slot; `Other` has no share
    #[must_use]
    pub const fn share_for(&self, meal_type: MealType) -> Option<f64> {
        match meal_type {
            MealType::Breakfast => Some(self.breakfast),
            MealType::Lunch => Some(self.lunch),
            MealType::Dinner => Some(self.dinner),
            MealType::Snack => Some(self.snack),
            MealType::Other => None,
        }
    }

    /// Slots with a non-zero share, in the order they are eaten
    #[must_use]
    pub fn slots(&self) -> Vec<(MealType, f64)> {
        [
            (MealType::Breakfast, self.breakfast),
            (MealType::Lunch, self.lunch),
            (MealType::Dinner, self.dinner),
            (MealType::Snack, self.snack),
        ]
        .into_iter()
        .filter(|(_, share)| *share > 0.0)
        .collect()
    }

    /// Validate that proportions are in range and sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any proportion is outside 0.0-1.0,
    /// or `ConfigError::InvalidWeights` if they do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = [
            ("breakfast", self.breakfast),
            ("lunch", self.lunch),
            ("dinner", self.dinner),
            ("snack", self.snack),
        ];

        for (name, value) in shares {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} proportion must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        let sum: f64 = shares.iter().map(|(_, value)| value).sum();
        if (sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(format!(
                "meal split proportions must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }
}
