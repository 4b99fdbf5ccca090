// ABOUTME: Day planner that splits a daily calorie target across meal slots
// ABOUTME: Composes breakfast, lunch, dinner, and snack in order with optional repeat avoidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use crate::composer::{compose_meal, MealRequest};
use crate::config::{ComposerConfig, MacroLimits, MealSplitConfig};
use crate::preferences::Preferences;
use chrono::NaiveDate;
use nutri_core::errors::{AppError, AppResult};
use nutri_core::models::{DayPlan, MealType, PlannedMeal, Product};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Parameters for planning one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlanRequest {
    /// Day being planned
    pub date: NaiveDate,
    /// Daily calorie target (kcal)
    pub daily_calories: f64,
    /// Allow scaling the last item of each meal
    #[serde(default)]
    pub flexibility: bool,
    /// Skip products already used earlier in the day
    #[serde(default = "default_avoid_repeats")]
    pub avoid_repeats: bool,
}

const fn default_avoid_repeats() -> bool {
    true
}

impl DayPlanRequest {
    /// Request with flexibility off and repeat avoidance on
    #[must_use]
    pub const fn new(date: NaiveDate, daily_calories: f64) -> Self {
        Self {
            date,
            daily_calories,
            flexibility: false,
            avoid_repeats: true,
        }
    }

    /// Boundary validation for the request and both configurations
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a negative or non-finite daily target, and
    /// `ConfigInvalid` if either configuration fails validation
    pub fn validate(&self, config: &ComposerConfig, split: &MealSplitConfig) -> AppResult<()> {
        if !self.daily_calories.is_finite() || self.daily_calories < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "daily_calories must be a non-negative number, got {}",
                self.daily_calories
            )));
        }
        config.validate()?;
        split.validate()?;
        Ok(())
    }
}

/// Request for one named slot of a day, targeted at the slot's share
///
/// The slot is read from `name` case-insensitively ("lunch", "Dinner").
///
/// # Errors
///
/// Returns `InvalidFormat` if `name` is not a breakfast, lunch, dinner, or
/// snack slot
pub fn slot_request(
    name: &str,
    daily_calories: f64,
    split: &MealSplitConfig,
) -> AppResult<MealRequest> {
    let meal_type = MealType::from_str_lossy(name);
    let share = split.share_for(meal_type).ok_or_else(|| {
        AppError::invalid_format(format!(
            "\"{name}\" is not a meal slot (breakfast, lunch, dinner, snack)"
        ))
    })?;
    Ok(MealRequest::new(name, (daily_calories * share).round()))
}

/// Caller preferences plus the barcodes already used today
#[derive(Debug)]
struct UnusedToday<'a> {
    inner: Option<&'a dyn Preferences>,
    used: &'a HashSet<String>,
}

impl Preferences for UnusedToday<'_> {
    fn matches(&self, product: &Product) -> bool {
        !self.used.contains(&product.barcode)
            && self.inner.is_none_or(|inner| inner.matches(product))
    }

    fn macro_limits(&self) -> MacroLimits {
        self.inner
            .map_or_else(MacroLimits::default, |inner| inner.macro_limits())
    }
}

/// Compose every slot of a day in eating order
///
/// Slot targets are `daily_calories x share`, rounded to whole kcal. Each slot
/// is an independent meal with nothing committed.
#[must_use]
pub fn plan_day(
    request: &DayPlanRequest,
    catalog: &[Product],
    preferences: Option<&dyn Preferences>,
    config: &ComposerConfig,
    split: &MealSplitConfig,
) -> DayPlan {
    let mut used: HashSet<String> = HashSet::new();
    let mut meals = Vec::new();

    for (meal_type, share) in split.slots() {
        let slot_request = MealRequest::new(
            meal_type.display_name(),
            (request.daily_calories * share).round(),
        )
        .with_flexibility(request.flexibility);

        let meal = if request.avoid_repeats {
            let unused = UnusedToday {
                inner: preferences,
                used: &used,
            };
            compose_meal(&slot_request, catalog, Some(&unused), config)
        } else {
            compose_meal(&slot_request, catalog, preferences, config)
        };

        used.extend(meal.items().iter().map(|item| item.barcode.clone()));
        meals.push(PlannedMeal { meal_type, meal });
    }

    let plan = DayPlan::new(request.date, request.daily_calories, meals);
    info!(
        date = %plan.date(),
        target_calories = plan.target_calories(),
        actual_calories = plan.actual_calories(),
        meals = plan.meals().len(),
        "day planned"
    );
    plan
}
