// ABOUTME: Meal composition engine for the Nutri Planner platform
// ABOUTME: Filter, score, select, and assemble catalog products into calorie-targeted meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

#![deny(unsafe_code)]

//! # Nutri Composer
//!
//! Given a calorie target and a catalog of food products, the composer picks
//! and optionally rescales a subset of products that lands within a tolerance
//! band of the target while keeping sugar and fat in balance. It is a greedy,
//! score-ranked heuristic, not an exact optimizer, and it is deterministic:
//! identical inputs always produce identical meals.
//!
//! ## Pipeline
//!
//! 1. **Preference filter**: drop products the user's preferences reject
//! 2. **Macro filter**: drop servings too large, too sugary, or too fatty
//! 3. **Fit scorer**: score each serving in [0, 1]
//! 4. **Greedy selector**: rank, cut off, and admit under a soft calorie cap
//! 5. **Meal assembler**: add items within tolerance, shrink at most one
//!
//! Everything is synchronous and free of shared mutable state, so independent
//! meals can be composed on separate threads ([`compose_batch`]).

/// Composer configuration and validation
pub mod config;
/// Meal composition entry points
pub mod composer;
/// Day planning across meal slots
pub mod planner;
/// Pipeline stages
pub mod pipeline;
/// Dietary preference capability and restriction types
pub mod preferences;
/// Serving resolution and scaling
pub mod serving;
/// Meal summaries
pub mod summary;

pub use composer::{build_meal, compose_batch, compose_meal, MealRequest};
pub use config::{ComposerConfig, ConfigError, MacroLimits, MealSplitConfig};
pub use planner::{plan_day, slot_request, DayPlanRequest};
pub use preferences::{
    AllOf, AllergenExclusion, DietFilter, DietaryRestriction, ExcludedProducts,
    PreferenceProfile, Preferences,
};
pub use serving::{resolve_serving, scale_serving, ServingInfo};
pub use summary::{summarize_meal, MacroPercentages, MealSummary};
