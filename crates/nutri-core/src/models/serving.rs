// ABOUTME: Serving size descriptor model with free-text parsing and proportional scaling
// ABOUTME: Normalizes catalog strings like "30 g" or "1 cup (240 ml)" into amount and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use crate::constants::units::{GRAMS_PER_KILOGRAM, GRAMS_PER_OUNCE, MILLILITERS_PER_LITER};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static QUANTITY_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn quantity_pattern() -> Option<&'static Regex> {
    QUANTITY_PATTERN
        .get_or_init(|| Regex::new(r"(\d+(?:[.,]\d+)?)\s*([[:alpha:]]+)?").ok())
        .as_ref()
}

/// Unit of a serving size
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingUnit {
    /// Weight in grams
    Grams,
    /// Volume in milliliters
    Milliliters,
    /// Count of whole servings (no physical unit known)
    Serving,
    /// Any other household unit (cup, slice, bar, ...)
    Other(String),
}

impl ServingUnit {
    /// Map a unit word to a unit and the multiplier that converts into it
    fn from_word(word: &str) -> (Self, f64) {
        match word.to_lowercase().as_str() {
            "g" | "gr" | "grs" | "gram" | "grams" | "gramme" | "grammes" => (Self::Grams, 1.0),
            "kg" => (Self::Grams, GRAMS_PER_KILOGRAM),
            "oz" => (Self::Grams, GRAMS_PER_OUNCE),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                (Self::Milliliters, 1.0)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => {
                (Self::Milliliters, MILLILITERS_PER_LITER)
            }
            "serving" | "servings" | "portion" | "portions" => (Self::Serving, 1.0),
            other => (Self::Other(other.to_owned()), 1.0),
        }
    }

    /// Whether this unit is a metric weight or volume
    #[must_use]
    pub const fn is_metric(&self) -> bool {
        matches!(self, Self::Grams | Self::Milliliters)
    }

    /// Get the abbreviation for display
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
            Self::Serving => "serving",
            Self::Other(unit) => unit,
        }
    }
}

/// Parsed serving size: an amount in a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    /// Numeric amount
    pub amount: f64,
    /// Unit of the amount
    pub unit: ServingUnit,
}

impl ServingSize {
    /// Create a serving size
    #[must_use]
    pub const fn new(amount: f64, unit: ServingUnit) -> Self {
        Self { amount, unit }
    }

    /// A weight in grams
    #[must_use]
    pub const fn grams(amount: f64) -> Self {
        Self::new(amount, ServingUnit::Grams)
    }

    /// One unspecified serving
    #[must_use]
    pub const fn one_serving() -> Self {
        Self::new(1.0, ServingUnit::Serving)
    }

    /// Parse a free-text serving descriptor
    ///
    /// The first metric quantity wins (so `"1 cup (240 ml)"` parses as 240 ml);
    /// without one, the first quantity is used as-is. A number with no unit
    /// counts servings. Returns `None` when the descriptor holds no number.
    #[must_use]
    pub fn parse(descriptor: &str) -> Option<Self> {
        let pattern = quantity_pattern()?;
        let mut first: Option<Self> = None;

        for captures in pattern.captures_iter(descriptor) {
            let Some(amount) = captures
                .get(1)
                .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
            else {
                continue;
            };
            let (unit, multiplier) = captures
                .get(2)
                .map_or((ServingUnit::Serving, 1.0), |m| {
                    ServingUnit::from_word(m.as_str())
                });
            let size = Self::new(amount * multiplier, unit);
            if size.unit.is_metric() {
                return Some(size);
            }
            first.get_or_insert(size);
        }

        first
    }

    /// Metric amount (grams or milliliters), if the unit is metric
    ///
    /// Milliliters are treated as grams for nutrient scaling, which matches how
    /// beverage catalogs report per-100ml values under their per-100g fields.
    #[must_use]
    pub const fn metric_amount(&self) -> Option<f64> {
        if self.unit.is_metric() {
            Some(self.amount)
        } else {
            None
        }
    }

    /// Proportionally scale the amount
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.amount * factor, self.unit.clone())
    }
}

impl fmt::Display for ServingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!("{:.2}", self.amount);
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{trimmed} {}", self.unit.abbreviation())
    }
}
