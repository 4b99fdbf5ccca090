// ABOUTME: User dietary preferences as a single-predicate capability over catalog products
// ABOUTME: Allergen exclusion, diet restrictions, excluded barcodes, conjunctions, and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! # Preferences
//!
//! A `Preferences` value answers one question, `matches(product)`, and may
//! adjust the macro balance thresholds used by the macro constraint filter.
//! When no preferences are supplied the pipeline filters nothing.

use crate::config::{ConfigError, MacroLimits};
use crate::serving::resolve_serving;
use nutri_core::constants::{diet, tags};
use nutri_core::models::{normalize_tag, Product};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Dietary capability consulted by the pipeline
pub trait Preferences: Send + Sync + fmt::Debug {
    /// Whether `product` is acceptable
    fn matches(&self, product: &Product) -> bool;

    /// Macro balance thresholds for this profile
    fn macro_limits(&self) -> MacroLimits {
        MacroLimits::default()
    }
}

/// Dietary restriction for filtering products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No gluten allergen
    GlutenFree,
    /// No milk allergen
    DairyFree,
    /// No tree nut or peanut allergen
    NutFree,
    /// Labelled vegan
    Vegan,
    /// Labelled vegetarian or vegan
    Vegetarian,
    /// Less than 10 g sugar per serving
    LowSugar,
    /// Less than 20 g carbohydrate per serving
    Keto,
}

impl DietaryRestriction {
    /// Whether `product` satisfies this restriction
    ///
    /// Nutrient-based restrictions reject products whose serving cannot be resolved.
    #[must_use]
    pub fn allows(&self, product: &Product) -> bool {
        match self {
            Self::GlutenFree => !product.has_allergen(tags::ALLERGEN_GLUTEN),
            Self::DairyFree => !product.has_allergen(tags::ALLERGEN_MILK),
            Self::NutFree => {
                !product.has_allergen(tags::ALLERGEN_NUTS)
                    && !product.has_allergen(tags::ALLERGEN_PEANUTS)
            }
            Self::Vegan => product.has_label(tags::LABEL_VEGAN),
            Self::Vegetarian => {
                product.has_label(tags::LABEL_VEGETARIAN) || product.has_label(tags::LABEL_VEGAN)
            }
            Self::LowSugar => resolve_serving(product)
                .is_some_and(|s| s.macros.sugars_g < diet::LOW_SUGAR_MAX_G_PER_SERVING),
            Self::Keto => resolve_serving(product)
                .is_some_and(|s| s.macros.carbs_g < diet::KETO_MAX_CARBS_G_PER_SERVING),
        }
    }
}

/// Reject products containing any of the listed allergens
#[derive(Debug, Clone, Default)]
pub struct AllergenExclusion {
    allergens: HashSet<String>,
}

impl AllergenExclusion {
    /// Exclude the given allergen tags (`en:milk` and `milk` are equivalent)
    #[must_use]
    pub fn new<I, S>(allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allergens: allergens
                .into_iter()
                .map(|a| normalize_tag(a.as_ref()))
                .collect(),
        }
    }
}

impl Preferences for AllergenExclusion {
    fn matches(&self, product: &Product) -> bool {
        !product
            .allergens
            .iter()
            .any(|a| self.allergens.contains(&normalize_tag(a)))
    }
}

/// Keep only products satisfying one dietary restriction
#[derive(Debug, Clone, Copy)]
pub struct DietFilter(pub DietaryRestriction);

impl Preferences for DietFilter {
    fn matches(&self, product: &Product) -> bool {
        self.0.allows(product)
    }
}

/// Reject products by barcode
#[derive(Debug, Clone, Default)]
pub struct ExcludedProducts {
    barcodes: HashSet<String>,
}

impl ExcludedProducts {
    /// Exclude the given barcodes
    #[must_use]
    pub fn new<I, S>(barcodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            barcodes: barcodes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Preferences for ExcludedProducts {
    fn matches(&self, product: &Product) -> bool {
        !self.barcodes.contains(&product.barcode)
    }
}

/// Conjunction: a product must satisfy every member
///
/// Macro limits are the element-wise tightest across members.
#[derive(Debug, Default)]
pub struct AllOf {
    members: Vec<Box<dyn Preferences>>,
}

impl AllOf {
    /// Empty conjunction (matches everything)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member
    #[must_use]
    pub fn with(mut self, member: impl Preferences + 'static) -> Self {
        self.members.push(Box::new(member));
        self
    }
}

impl Preferences for AllOf {
    fn matches(&self, product: &Product) -> bool {
        self.members.iter().all(|member| member.matches(product))
    }

    fn macro_limits(&self) -> MacroLimits {
        self.members
            .iter()
            .map(|member| member.macro_limits())
            .reduce(|acc, limits| acc.tightest(&limits))
            .unwrap_or_default()
    }
}

/// Serializable user preference profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceProfile {
    /// Allergen tags to avoid
    pub allergens: Vec<String>,
    /// Restrictions that must all hold
    pub diets: Vec<DietaryRestriction>,
    /// Barcodes never to select
    pub excluded_barcodes: Vec<String>,
    /// Override for the macro balance thresholds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_limits: Option<MacroLimits>,
}

impl PreferenceProfile {
    /// Validate the macro limit override, if any
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if an override ratio is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.macro_limits.as_ref().map_or(Ok(()), MacroLimits::validate)
    }
}

impl Preferences for PreferenceProfile {
    fn matches(&self, product: &Product) -> bool {
        if self.excluded_barcodes.iter().any(|b| *b == product.barcode) {
            return false;
        }
        if self.allergens.iter().any(|a| product.has_allergen(a)) {
            return false;
        }
        self.diets.iter().all(|d| d.allows(product))
    }

    fn macro_limits(&self) -> MacroLimits {
        self.macro_limits.unwrap_or_default()
    }
}
