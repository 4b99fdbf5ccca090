// ABOUTME: Serving resolution and proportional scaling for catalog products
// ABOUTME: Turns optional catalog nutriments into an immutable ServingInfo or nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! # Serving Resolution
//!
//! Every pipeline stage works on one serving of a product. A serving is
//! resolved in this order:
//!
//! 1. All five per-serving values present: use them, with the parsed serving
//!    descriptor, else `serving_quantity` grams, else "1 serving" as the size.
//! 2. All five per-100g values present and the serving weight known (from
//!    `serving_quantity` or a metric descriptor): scale per-100g to the serving.
//! 3. Otherwise the product is unresolvable and the pipeline skips it.
//!
//! Absent values are never read as zero.

use nutri_core::constants::units::REFERENCE_PORTION_GRAMS;
use nutri_core::models::{MacroBreakdown, MealItem, NutrientProfile, Product, ServingSize};
use serde::{Deserialize, Serialize};

/// Amounts closer than this (g or ml) are the same serving weight
const SAME_AMOUNT_EPSILON: f64 = 1e-6;

/// One resolved serving of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingInfo {
    /// Serving size descriptor
    pub size: ServingSize,
    /// Energy of the serving (kcal)
    pub calories: f64,
    /// Macros of the serving
    pub macros: MacroBreakdown,
}

impl ServingInfo {
    /// Multiply size, calories and macros by `factor`
    ///
    /// Pure arithmetic: bounds on the factor are the caller's concern.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            size: self.size.scaled(factor),
            calories: self.calories * factor,
            macros: self.macros.scaled(factor),
        }
    }

    /// Turn this serving of `product` into a meal item
    #[must_use]
    pub fn into_meal_item(self, product: &Product, scale_factor: Option<f64>) -> MealItem {
        MealItem {
            barcode: product.barcode.clone(),
            name: product.name.clone(),
            serving: self.size,
            calories: self.calories,
            macros: self.macros,
            scale_factor,
        }
    }

    fn from_profile(size: ServingSize, profile: NutrientProfile) -> Self {
        Self {
            size,
            calories: profile.calories,
            macros: profile.macros,
        }
    }
}

/// Resolve one serving of `product`, or `None` if its data is incomplete
#[must_use]
pub fn resolve_serving(product: &Product) -> Option<ServingInfo> {
    let described = product.serving_size.as_deref().and_then(ServingSize::parse);
    let quantity = product
        .serving_quantity
        .filter(|grams| grams.is_finite() && *grams > 0.0);

    if let Some(profile) = product.nutriments.per_serving() {
        let size = described
            .or_else(|| quantity.map(ServingSize::grams))
            .unwrap_or_else(ServingSize::one_serving);
        return Some(ServingInfo::from_profile(size, profile));
    }

    let per_100g = product.nutriments.per_100g()?;
    let (size, grams) = match quantity {
        // Nutrients follow `serving_quantity`, so the size must say the same amount
        Some(grams) => (
            described
                .filter(|size| {
                    size.metric_amount()
                        .is_some_and(|amount| (amount - grams).abs() < SAME_AMOUNT_EPSILON)
                })
                .unwrap_or_else(|| ServingSize::grams(grams)),
            grams,
        ),
        None => {
            let size = described?;
            let grams = size.metric_amount().filter(|amount| *amount > 0.0)?;
            (size, grams)
        }
    };

    Some(ServingInfo::from_profile(
        size,
        per_100g.scaled(grams / REFERENCE_PORTION_GRAMS),
    ))
}

/// Resolve a serving and scale it by `factor`
///
/// Returns `None` ("unscalable") when the serving cannot be resolved or the
/// factor is not a finite positive number. The scale floor is enforced by the
/// meal assembler, not here.
#[must_use]
pub fn scale_serving(product: &Product, factor: f64) -> Option<ServingInfo> {
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }
    resolve_serving(product).map(|serving| serving.scaled(factor))
}
