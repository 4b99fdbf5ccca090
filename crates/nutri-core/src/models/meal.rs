// ABOUTME: Composed meal models handed to downstream tracking storage
// ABOUTME: MacroBreakdown, MealItem, Meal, MealType, and DayPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use super::serving::ServingSize;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Macro-nutrient content of one specific serving (not per 100 g)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Sugars (grams), a subset of carbohydrates
    pub sugars_g: f64,
}

impl MacroBreakdown {
    /// Proportionally scale every macro
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbs_g: self.carbs_g * factor,
            sugars_g: self.sugars_g * factor,
        }
    }

    /// Element-wise sum
    #[must_use]
    pub fn combined(&self, other: &Self) -> Self {
        Self {
            protein_g: self.protein_g + other.protein_g,
            fat_g: self.fat_g + other.fat_g,
            carbs_g: self.carbs_g + other.carbs_g,
            sugars_g: self.sugars_g + other.sugars_g,
        }
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Display name used when a meal is named after its slot
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
            Self::Other => "Meal",
        }
    }
}

/// One product portion inside a composed meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    /// Product barcode
    pub barcode: String,
    /// Product display name
    pub name: String,
    /// Serving actually used (scaled when `scale_factor` is set)
    pub serving: ServingSize,
    /// Energy of this portion (kcal)
    pub calories: f64,
    /// Macros of this portion
    pub macros: MacroBreakdown,
    /// Factor applied to the product's full serving, when it was shrunk to fit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f64>,
}

/// A composed meal
///
/// `actual_calories` is always the sum of the items' calories, summed in item
/// order. The fields are private so the only way to build a `Meal` is through
/// [`Meal::from_items`] or [`Meal::empty`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    name: String,
    target_calories: f64,
    actual_calories: f64,
    items: Vec<MealItem>,
}

impl Meal {
    /// Build a meal from items in selection order
    #[must_use]
    pub fn from_items(name: impl Into<String>, target_calories: f64, items: Vec<MealItem>) -> Self {
        let actual_calories = items.iter().fold(0.0, |total, item| total + item.calories);
        Self {
            name: name.into(),
            target_calories,
            actual_calories,
            items,
        }
    }

    /// A meal with no items
    #[must_use]
    pub fn empty(name: impl Into<String>, target_calories: f64) -> Self {
        Self::from_items(name, target_calories, Vec::new())
    }

    /// Meal name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requested calories
    #[must_use]
    pub const fn target_calories(&self) -> f64 {
        self.target_calories
    }

    /// Sum of item calories
    #[must_use]
    pub const fn actual_calories(&self) -> f64 {
        self.actual_calories
    }

    /// Items in selection order
    #[must_use]
    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    /// Whether the meal has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item macros
    #[must_use]
    pub fn total_macros(&self) -> MacroBreakdown {
        self.items
            .iter()
            .fold(MacroBreakdown::default(), |total, item| {
                total.combined(&item.macros)
            })
    }
}

/// A meal assigned to a slot of the day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Slot of the day
    pub meal_type: MealType,
    /// Composed meal for the slot
    pub meal: Meal,
}

/// A full day of composed meals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    date: NaiveDate,
    target_calories: f64,
    actual_calories: f64,
    meals: Vec<PlannedMeal>,
}

impl DayPlan {
    /// Build a day plan; `actual_calories` is the sum over meals
    #[must_use]
    pub fn new(date: NaiveDate, target_calories: f64, meals: Vec<PlannedMeal>) -> Self {
        let actual_calories = meals
            .iter()
            .fold(0.0, |total, planned| total + planned.meal.actual_calories());
        Self {
            date,
            target_calories,
            actual_calories,
            meals,
        }
    }

    /// Day the plan is for
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Requested daily calories
    #[must_use]
    pub const fn target_calories(&self) -> f64 {
        self.target_calories
    }

    /// Sum of meal calories
    #[must_use]
    pub const fn actual_calories(&self) -> f64 {
        self.actual_calories
    }

    /// Meals in slot order
    #[must_use]
    pub fn meals(&self) -> &[PlannedMeal] {
        &self.meals
    }
}
