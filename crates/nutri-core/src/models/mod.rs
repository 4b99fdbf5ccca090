// ABOUTME: Core data models for catalog products and composed meals
// ABOUTME: Re-exports Product, ServingSize, Meal, MealItem, and DayPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! # Data Models
//!
//! - `Product`: catalog record with optional nutrients and taxonomy tags
//! - `ServingSize`: parsed serving descriptor
//! - `Meal` / `MealItem`: composition output, immutable once built
//! - `DayPlan`: meals for each slot of a day

mod meal;
mod product;
mod serving;

pub use meal::{DayPlan, MacroBreakdown, Meal, MealItem, MealType, PlannedMeal};
pub use product::{normalize_tag, NutrientProfile, Nutriments, Product};
pub use serving::{ServingSize, ServingUnit};
