// ABOUTME: Unit conversion constants for serving size descriptors
// ABOUTME: Weight and volume factors used to normalize servings to grams or milliliters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

/// Grams per kilogram
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Grams per avoirdupois ounce
pub const GRAMS_PER_OUNCE: f64 = 28.35;

/// Milliliters per liter
pub const MILLILITERS_PER_LITER: f64 = 1000.0;

/// Nutrient values in catalogs are expressed per this many grams
pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;
