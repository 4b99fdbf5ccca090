// ABOUTME: Meal composition entry points wiring the pipeline stages together
// ABOUTME: build_meal, compose_meal with committed calories, and parallel batch composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use crate::config::ComposerConfig;
use crate::pipeline::{
    assemble_meal, filter_by_macros, filter_by_preferences, select_candidates,
};
use crate::preferences::Preferences;
use nutri_core::errors::{AppError, AppResult};
use nutri_core::models::{Meal, Product};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Parameters for composing one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRequest {
    /// Name given to the meal
    pub name: String,
    /// Calorie target (kcal)
    pub target_calories: f64,
    /// Calories already eaten elsewhere, seen only by the macro filter
    #[serde(default)]
    pub committed_calories: f64,
    /// Allow scaling down the last item
    #[serde(default)]
    pub flexibility: bool,
}

impl MealRequest {
    /// Request with no committed calories and flexibility off
    #[must_use]
    pub fn new(name: impl Into<String>, target_calories: f64) -> Self {
        Self {
            name: name.into(),
            target_calories,
            committed_calories: 0.0,
            flexibility: false,
        }
    }

    /// Set flexibility
    #[must_use]
    pub const fn with_flexibility(mut self, flexibility: bool) -> Self {
        self.flexibility = flexibility;
        self
    }

    /// Set committed calories
    #[must_use]
    pub const fn with_committed_calories(mut self, committed_calories: f64) -> Self {
        self.committed_calories = committed_calories;
        self
    }

    /// Boundary validation; the engine itself never re-checks its inputs
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a negative or non-finite target or
    /// committed amount, and `ConfigInvalid` if `config` fails validation
    pub fn validate(&self, config: &ComposerConfig) -> AppResult<()> {
        if !self.target_calories.is_finite() || self.target_calories < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "target_calories must be a non-negative number, got {}",
                self.target_calories
            )));
        }
        if !self.committed_calories.is_finite() || self.committed_calories < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "committed_calories must be a non-negative number, got {}",
                self.committed_calories
            )));
        }
        config.validate()?;
        Ok(())
    }
}

/// Compose one meal from `catalog`
///
/// `committed_calories` reaches the macro constraint filter only; selection
/// always scores against zero committed calories.
#[must_use]
pub fn compose_meal(
    request: &MealRequest,
    catalog: &[Product],
    preferences: Option<&dyn Preferences>,
    config: &ComposerConfig,
) -> Meal {
    let max_items = config.max_items(request.flexibility);
    let tolerance = config.tolerance(request.flexibility);

    let allowed = filter_by_preferences(catalog, preferences);
    let balanced = filter_by_macros(
        &allowed,
        request.target_calories,
        request.committed_calories,
        preferences,
    );
    let selected = select_candidates(&balanced, request.target_calories, max_items);

    let meal = assemble_meal(
        &request.name,
        request.target_calories,
        selected.iter().map(|candidate| candidate.product),
        request.flexibility,
        tolerance,
    );

    info!(
        meal = %meal.name(),
        catalog_size = catalog.len(),
        after_preferences = allowed.len(),
        after_macros = balanced.len(),
        selected = selected.len(),
        items = meal.items().len(),
        target_calories = meal.target_calories(),
        actual_calories = meal.actual_calories(),
        scaled = meal.items().iter().any(|item| item.scale_factor.is_some()),
        "meal composed"
    );

    meal
}

/// Build a meal from `catalog` with no calories committed elsewhere
#[must_use]
pub fn build_meal(
    meal_name: &str,
    target_calories: f64,
    catalog: &[Product],
    preferences: Option<&dyn Preferences>,
    flexibility: bool,
    config: &ComposerConfig,
) -> Meal {
    let request = MealRequest::new(meal_name, target_calories).with_flexibility(flexibility);
    compose_meal(&request, catalog, preferences, config)
}

/// Compose independent meals in parallel; output order matches `requests`
#[must_use]
pub fn compose_batch(
    requests: &[MealRequest],
    catalog: &[Product],
    preferences: Option<&dyn Preferences>,
    config: &ComposerConfig,
) -> Vec<Meal> {
    requests
        .par_iter()
        .map(|request| compose_meal(request, catalog, preferences, config))
        .collect()
}
