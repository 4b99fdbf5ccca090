// ABOUTME: Application-level constants for the planner binary and catalog loading
// ABOUTME: Service names, environment variable names, and CLI defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! Constants module
//!
//! Engine constants (energy factors, diet thresholds, tags) live in
//! `nutri_core::constants`; this module holds what only the application needs.

/// Service names
pub mod service_names {
    /// Planner service name used in structured logs
    pub const NUTRI_PLANNER: &str = "nutri_planner";
}

/// Environment variables read by [`crate::config::PlannerConfig::from_env`]
pub mod env_vars {
    /// Item budget with flexibility off
    pub const MAX_ITEMS_PER_MEAL: &str = "NUTRI_MAX_ITEMS_PER_MEAL";
    /// Item budget with flexibility on
    pub const MAX_ITEMS_FLEXIBLE: &str = "NUTRI_MAX_ITEMS_FLEXIBLE";
    /// Tolerance with flexibility off
    pub const CALORIE_TOLERANCE_STRICT: &str = "NUTRI_CALORIE_TOLERANCE_STRICT";
    /// Tolerance with flexibility on
    pub const CALORIE_TOLERANCE_FLEXIBLE: &str = "NUTRI_CALORIE_TOLERANCE_FLEXIBLE";
    /// Breakfast share of daily calories
    pub const SPLIT_BREAKFAST: &str = "NUTRI_SPLIT_BREAKFAST";
    /// Lunch share of daily calories
    pub const SPLIT_LUNCH: &str = "NUTRI_SPLIT_LUNCH";
    /// Dinner share of daily calories
    pub const SPLIT_DINNER: &str = "NUTRI_SPLIT_DINNER";
    /// Snack share of daily calories
    pub const SPLIT_SNACK: &str = "NUTRI_SPLIT_SNACK";
}

/// CLI defaults
pub mod cli_defaults {
    /// Meal name when `--name` is not given
    pub const MEAL_NAME: &str = "Meal";
}
