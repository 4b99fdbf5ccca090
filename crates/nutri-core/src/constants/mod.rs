// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for energy densities, diet thresholds, and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion constants for serving descriptors
pub mod units;

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein energy density
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Sugar energy density (sugars are carbohydrates)
    pub const KCAL_PER_G_SUGAR: f64 = 4.0;
    /// Fat energy density
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Per-serving thresholds used by diet restrictions
pub mod diet {
    /// Low sugar: strictly less than this many grams of sugar per serving
    pub const LOW_SUGAR_MAX_G_PER_SERVING: f64 = 10.0;
    /// Ketogenic: strictly less than this many grams of carbohydrate per serving
    pub const KETO_MAX_CARBS_G_PER_SERVING: f64 = 20.0;
}

/// Taxonomy tags used to match allergens and labels
pub mod tags {
    /// Gluten allergen tag
    pub const ALLERGEN_GLUTEN: &str = "gluten";
    /// Milk allergen tag
    pub const ALLERGEN_MILK: &str = "milk";
    /// Tree nut allergen tag
    pub const ALLERGEN_NUTS: &str = "nuts";
    /// Peanut allergen tag
    pub const ALLERGEN_PEANUTS: &str = "peanuts";
    /// Vegan label tag
    pub const LABEL_VEGAN: &str = "vegan";
    /// Vegetarian label tag
    pub const LABEL_VEGETARIAN: &str = "vegetarian";
}
