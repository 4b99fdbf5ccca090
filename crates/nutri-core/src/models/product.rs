// ABOUTME: Catalog product model with optional per-serving and per-100g nutriments
// ABOUTME: Product, Nutriments, and NutrientProfile definitions plus a lenient number decoder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use super::meal::MacroBreakdown;
use serde::{Deserialize, Deserializer, Serialize};

/// Calories plus macros for one portion, with every field known
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy in kcal
    pub calories: f64,
    /// Macro breakdown in grams
    pub macros: MacroBreakdown,
}

impl NutrientProfile {
    /// Proportionally scale calories and macros
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            macros: self.macros.scaled(factor),
        }
    }

    fn from_fields(
        calories: Option<f64>,
        protein_g: Option<f64>,
        fat_g: Option<f64>,
        carbs_g: Option<f64>,
        sugars_g: Option<f64>,
    ) -> Option<Self> {
        let usable = |value: Option<f64>| value.filter(|v| v.is_finite() && *v >= 0.0);
        Some(Self {
            calories: usable(calories)?,
            macros: MacroBreakdown {
                protein_g: usable(protein_g)?,
                fat_g: usable(fat_g)?,
                carbs_g: usable(carbs_g)?,
                sugars_g: usable(sugars_g)?,
            },
        })
    }
}

/// Nutrient values as reported by the catalog
///
/// Every field is optional. Field names follow the public food-facts export
/// convention so catalog dumps deserialize without a mapping layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutriments {
    /// Energy per serving (kcal)
    #[serde(
        rename = "energy-kcal_serving",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_kcal_serving: Option<f64>,
    /// Protein per serving (g)
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub proteins_serving: Option<f64>,
    /// Fat per serving (g)
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub fat_serving: Option<f64>,
    /// Carbohydrates per serving (g)
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub carbohydrates_serving: Option<f64>,
    /// Sugars per serving (g)
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub sugars_serving: Option<f64>,
    /// Energy per 100 g (kcal)
    #[serde(
        rename = "energy-kcal_100g",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_kcal_100g: Option<f64>,
    /// Protein per 100 g
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub proteins_100g: Option<f64>,
    /// Fat per 100 g
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub fat_100g: Option<f64>,
    /// Carbohydrates per 100 g
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub carbohydrates_100g: Option<f64>,
    /// Sugars per 100 g
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub sugars_100g: Option<f64>,
}

impl Nutriments {
    /// Complete per-serving profile, if all five values are present and sane
    #[must_use]
    pub fn per_serving(&self) -> Option<NutrientProfile> {
        NutrientProfile::from_fields(
            self.energy_kcal_serving,
            self.proteins_serving,
            self.fat_serving,
            self.carbohydrates_serving,
            self.sugars_serving,
        )
    }

    /// Complete per-100g profile, if all five values are present and sane
    #[must_use]
    pub fn per_100g(&self) -> Option<NutrientProfile> {
        NutrientProfile::from_fields(
            self.energy_kcal_100g,
            self.proteins_100g,
            self.fat_100g,
            self.carbohydrates_100g,
            self.sugars_100g,
        )
    }
}

/// Food product from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Barcode (EAN/UPC) identifying the product
    #[serde(alias = "code")]
    pub barcode: String,
    /// Display name
    #[serde(alias = "product_name", default)]
    pub name: String,
    /// Brand name (if applicable)
    #[serde(alias = "brands", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Free-text serving descriptor ("30 g", "1 cup (240 ml)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Weight of one serving in grams
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub serving_quantity: Option<f64>,
    /// Reported nutrient values
    #[serde(default)]
    pub nutriments: Nutriments,
    /// Allergen taxonomy tags (e.g. `en:milk`)
    #[serde(alias = "allergens_tags", default)]
    pub allergens: Vec<String>,
    /// Label taxonomy tags (e.g. `en:vegan`)
    #[serde(alias = "labels_tags", default)]
    pub labels: Vec<String>,
    /// Category taxonomy tags
    #[serde(alias = "categories_tags", default)]
    pub categories: Vec<String>,
}

impl Product {
    /// Create a product with no nutrient data
    #[must_use]
    pub fn new(barcode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
            brand: None,
            serving_size: None,
            serving_quantity: None,
            nutriments: Nutriments::default(),
            allergens: Vec::new(),
            labels: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Set all five per-serving nutrient values
    #[must_use]
    pub fn with_serving_nutrients(
        mut self,
        calories: f64,
        protein_g: f64,
        fat_g: f64,
        carbs_g: f64,
        sugars_g: f64,
    ) -> Self {
        self.nutriments.energy_kcal_serving = Some(calories);
        self.nutriments.proteins_serving = Some(protein_g);
        self.nutriments.fat_serving = Some(fat_g);
        self.nutriments.carbohydrates_serving = Some(carbs_g);
        self.nutriments.sugars_serving = Some(sugars_g);
        self
    }

    /// Set all five per-100g nutrient values
    #[must_use]
    pub fn with_nutrients_per_100g(
        mut self,
        calories: f64,
        protein_g: f64,
        fat_g: f64,
        carbs_g: f64,
        sugars_g: f64,
    ) -> Self {
        self.nutriments.energy_kcal_100g = Some(calories);
        self.nutriments.proteins_100g = Some(protein_g);
        self.nutriments.fat_100g = Some(fat_g);
        self.nutriments.carbohydrates_100g = Some(carbs_g);
        self.nutriments.sugars_100g = Some(sugars_g);
        self
    }

    /// Set the free-text serving descriptor
    #[must_use]
    pub fn with_serving_size(mut self, descriptor: impl Into<String>) -> Self {
        self.serving_size = Some(descriptor.into());
        self
    }

    /// Set the serving weight in grams
    #[must_use]
    pub fn with_serving_quantity(mut self, grams: f64) -> Self {
        self.serving_quantity = Some(grams);
        self
    }

    /// Set the brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set allergen tags
    #[must_use]
    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    /// Set label tags
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any allergen tag matches `tag` (language prefix and case ignored)
    #[must_use]
    pub fn has_allergen(&self, tag: &str) -> bool {
        self.allergens.iter().any(|a| tag_matches(a, tag))
    }

    /// Whether any label tag matches `tag` (language prefix and case ignored)
    #[must_use]
    pub fn has_label(&self, tag: &str) -> bool {
        self.labels.iter().any(|l| tag_matches(l, tag))
    }
}

/// Strip an `xx:` language prefix and normalize case and separators
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    let bare = tag.split_once(':').map_or(tag, |(_, rest)| rest);
    bare.trim().to_lowercase().replace(['_', ' '], "-")
}

fn tag_matches(candidate: &str, wanted: &str) -> bool {
    normalize_tag(candidate) == normalize_tag(wanted)
}

/// Accept numbers, numeric strings ("12.5", "12,5"), or null
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => Some(value),
        Some(Raw::Text(text)) => text.trim().replace(',', ".").parse().ok(),
        None => None,
    })
}
