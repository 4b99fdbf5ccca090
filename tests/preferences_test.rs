// ABOUTME: Tests for dietary preference types and their effect on meal composition
// ABOUTME: Validates allergen tags, diet restrictions, exclusions, conjunctions, and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{approx_eq, balanced_product, default_config, init_test_logging, product, sample_catalog};
use nutri_planner::composer::{
    build_meal, AllOf, AllergenExclusion, DietFilter, DietaryRestriction, ExcludedProducts,
    MacroLimits, PreferenceProfile, Preferences,
};
use nutri_planner::models::normalize_tag;

#[test]
fn test_normalize_tag() {
    assert_eq!(normalize_tag("en:milk"), "milk");
    assert_eq!(normalize_tag("Milk"), "milk");
    assert_eq!(normalize_tag("fr:fruits_a_coque"), "fruits-a-coque");
    assert_eq!(normalize_tag("en:high protein"), "high-protein");
}

#[test]
fn test_allergen_exclusion_ignores_prefix_and_case() {
    let exclusion = AllergenExclusion::new(["MILK"]);
    let yogurt = balanced_product("Y", 120.0).with_allergens(["en:milk"]);
    let bread = balanced_product("B", 120.0).with_allergens(["en:gluten"]);
    let water = balanced_product("W", 0.0);

    assert!(!exclusion.matches(&yogurt));
    assert!(exclusion.matches(&bread));
    assert!(exclusion.matches(&water));
}

#[test]
fn test_allergen_based_diets() {
    let nuts = balanced_product("N", 180.0).with_allergens(["en:nuts"]);
    let peanuts = balanced_product("P", 180.0).with_allergens(["en:peanuts"]);
    let gluten = balanced_product("G", 180.0).with_allergens(["en:gluten"]);
    let milk = balanced_product("M", 180.0).with_allergens(["en:milk"]);

    assert!(!DietaryRestriction::NutFree.allows(&nuts));
    assert!(!DietaryRestriction::NutFree.allows(&peanuts));
    assert!(DietaryRestriction::NutFree.allows(&gluten));
    assert!(!DietaryRestriction::GlutenFree.allows(&gluten));
    assert!(DietaryRestriction::GlutenFree.allows(&milk));
    assert!(!DietaryRestriction::DairyFree.allows(&milk));
    assert!(DietaryRestriction::DairyFree.allows(&nuts));
}

#[test]
fn test_label_based_diets() {
    let vegan = balanced_product("VG", 200.0).with_labels(["en:vegan"]);
    let vegetarian = balanced_product("VT", 200.0).with_labels(["en:vegetarian"]);
    let unlabelled = balanced_product("U", 200.0);

    assert!(DietaryRestriction::Vegan.allows(&vegan));
    assert!(!DietaryRestriction::Vegan.allows(&vegetarian));
    assert!(!DietaryRestriction::Vegan.allows(&unlabelled));

    assert!(DietaryRestriction::Vegetarian.allows(&vegan));
    assert!(DietaryRestriction::Vegetarian.allows(&vegetarian));
    assert!(!DietaryRestriction::Vegetarian.allows(&unlabelled));
}

#[test]
fn test_nutrient_based_diets_use_resolved_serving() {
    let low_sugar = product("LS", 150.0, 5.0, 5.0, 15.0, 9.9);
    let sweet = product("SW", 150.0, 5.0, 5.0, 15.0, 10.0);
    let low_carb = product("LC", 250.0, 20.0, 18.0, 4.0, 1.0);
    let high_carb = product("HC", 250.0, 5.0, 2.0, 45.0, 1.0);
    let unknown = common::unresolvable_product("UNK");

    assert!(DietaryRestriction::LowSugar.allows(&low_sugar));
    assert!(!DietaryRestriction::LowSugar.allows(&sweet));
    assert!(!DietaryRestriction::LowSugar.allows(&unknown));

    assert!(DietaryRestriction::Keto.allows(&low_carb));
    assert!(!DietaryRestriction::Keto.allows(&high_carb));
    assert!(!DietaryRestriction::Keto.allows(&unknown));
}

#[test]
fn test_excluded_products() {
    let excluded = ExcludedProducts::new(["0001", "0002"]);

    assert!(!excluded.matches(&balanced_product("0001", 100.0)));
    assert!(excluded.matches(&balanced_product("0003", 100.0)));
}

#[test]
fn test_all_of_requires_every_member() {
    let preferences = AllOf::new()
        .with(DietFilter(DietaryRestriction::Vegan))
        .with(AllergenExclusion::new(["gluten"]));

    let vegan_gluten_free = balanced_product("A", 200.0).with_labels(["en:vegan"]);
    let vegan_with_gluten = balanced_product("B", 200.0)
        .with_labels(["en:vegan"])
        .with_allergens(["en:gluten"]);

    assert!(preferences.matches(&vegan_gluten_free));
    assert!(!preferences.matches(&vegan_with_gluten));
    assert!(AllOf::new().matches(&vegan_with_gluten));
}

#[test]
fn test_all_of_uses_tightest_macro_limits() {
    let loose_sugar = PreferenceProfile {
        macro_limits: Some(MacroLimits {
            max_serving_ratio: 1.2,
            max_sugar_energy_ratio: 0.5,
            max_fat_energy_ratio: 0.6,
        }),
        ..PreferenceProfile::default()
    };
    let tight_sugar = PreferenceProfile {
        macro_limits: Some(MacroLimits {
            max_serving_ratio: 2.0,
            max_sugar_energy_ratio: 0.1,
            max_fat_energy_ratio: 0.4,
        }),
        ..PreferenceProfile::default()
    };

    let limits = AllOf::new().with(loose_sugar).with(tight_sugar).macro_limits();

    assert!(approx_eq(limits.max_serving_ratio, 1.2));
    assert!(approx_eq(limits.max_sugar_energy_ratio, 0.1));
    assert!(approx_eq(limits.max_fat_energy_ratio, 0.4));
    assert_eq!(AllOf::new().macro_limits(), MacroLimits::default());
}

#[test]
fn test_preference_profile_deserializes_and_matches() {
    let profile: PreferenceProfile = serde_json::from_str(
        r#"{
            "allergens": ["en:milk"],
            "diets": ["vegetarian", "low_sugar"],
            "excluded_barcodes": ["0009"]
        }"#,
    )
    .unwrap();

    assert!(profile.validate().is_ok());
    assert_eq!(profile.macro_limits(), MacroLimits::default());
    assert_eq!(
        profile.diets,
        vec![DietaryRestriction::Vegetarian, DietaryRestriction::LowSugar]
    );

    let ok = product("OK", 200.0, 8.0, 4.0, 30.0, 3.0).with_labels(["en:vegetarian"]);
    let dairy = ok.clone().with_allergens(["en:milk"]);
    let mut excluded = ok.clone();
    excluded.barcode = "0009".into();

    assert!(profile.matches(&ok));
    assert!(!profile.matches(&dairy));
    assert!(!profile.matches(&excluded));
}

#[test]
fn test_preference_profile_rejects_bad_macro_limits() {
    let profile = PreferenceProfile {
        macro_limits: Some(MacroLimits {
            max_fat_energy_ratio: 0.0,
            ..MacroLimits::default()
        }),
        ..PreferenceProfile::default()
    };

    assert!(profile.validate().is_err());
}

#[test]
fn test_preferences_shape_composed_meal() {
    init_test_logging();
    let catalog = sample_catalog();
    let vegan = DietFilter(DietaryRestriction::Vegan);

    let meal = build_meal("Breakfast", 500.0, &catalog, Some(&vegan), false, &default_config());

    assert!(!meal.is_empty());
    for item in meal.items() {
        let source = catalog.iter().find(|p| p.barcode == item.barcode).unwrap();
        assert!(source.has_label("vegan"), "{} is not vegan", item.barcode);
    }
}

#[test]
fn test_preferences_rejecting_everything_gives_empty_meal() {
    init_test_logging();
    let catalog = sample_catalog();
    let everything: Vec<String> = catalog.iter().map(|p| p.barcode.clone()).collect();
    let excluded = ExcludedProducts::new(everything);

    let meal = build_meal("Lunch", 600.0, &catalog, Some(&excluded), true, &default_config());

    assert!(meal.is_empty());
    assert_eq!(meal.actual_calories(), 0.0);
}
