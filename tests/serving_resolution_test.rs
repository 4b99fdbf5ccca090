// ABOUTME: Tests for serving size parsing, serving resolution, and proportional scaling
// ABOUTME: Covers per-serving and per-100g catalogs, unit conversion, and unresolvable products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, product, unresolvable_product};
use nutri_planner::composer::{resolve_serving, scale_serving};
use nutri_planner::models::{Product, ServingSize, ServingUnit};

// ============================================================================
// Serving descriptor parsing
// ============================================================================

#[test]
fn test_parse_grams() {
    let size = ServingSize::parse("30 g").unwrap();
    assert_eq!(size, ServingSize::grams(30.0));

    let compact = ServingSize::parse("45g").unwrap();
    assert_eq!(compact, ServingSize::grams(45.0));
}

#[test]
fn test_parse_prefers_metric_quantity() {
    let size = ServingSize::parse("1 cup (240 ml)").unwrap();
    assert_eq!(size.unit, ServingUnit::Milliliters);
    assert_eq!(size.amount, 240.0);
}

#[test]
fn test_parse_decimal_comma_and_unit_conversion() {
    assert_eq!(ServingSize::parse("12,5 g").unwrap().amount, 12.5);

    let kilo = ServingSize::parse("0.5 kg").unwrap();
    assert_eq!(kilo, ServingSize::grams(500.0));

    let litre = ServingSize::parse("0.33 l").unwrap();
    assert_eq!(litre.unit, ServingUnit::Milliliters);
    assert!(approx_eq(litre.amount, 330.0));

    let ounce = ServingSize::parse("2 oz").unwrap();
    assert!(approx_eq(ounce.amount, 56.7));
    assert_eq!(ounce.unit, ServingUnit::Grams);
}

#[test]
fn test_parse_household_units() {
    let slices = ServingSize::parse("2 slices").unwrap();
    assert_eq!(slices.unit, ServingUnit::Other("slices".into()));
    assert_eq!(slices.amount, 2.0);

    let bare = ServingSize::parse("1").unwrap();
    assert_eq!(bare, ServingSize::one_serving());
}

#[test]
fn test_parse_without_number_fails() {
    assert!(ServingSize::parse("one bowl").is_none());
    assert!(ServingSize::parse("").is_none());
}

#[test]
fn test_serving_size_display() {
    assert_eq!(ServingSize::grams(30.0).to_string(), "30 g");
    assert_eq!(ServingSize::grams(12.3456).to_string(), "12.35 g");
    assert_eq!(ServingSize::one_serving().scaled(0.5).to_string(), "0.5 serving");
    assert_eq!(
        ServingSize::new(250.0, ServingUnit::Milliliters).to_string(),
        "250 ml"
    );
}

// ============================================================================
// Serving resolution
// ============================================================================

#[test]
fn test_resolve_per_serving_values() {
    let bar = product("BAR", 250.0, 3.5, 12.0, 32.0, 27.0).with_serving_size("1 bar (51 g)");

    let serving = resolve_serving(&bar).unwrap();

    assert_eq!(serving.calories, 250.0);
    assert_eq!(serving.macros.protein_g, 3.5);
    assert_eq!(serving.macros.fat_g, 12.0);
    assert_eq!(serving.macros.carbs_g, 32.0);
    assert_eq!(serving.macros.sugars_g, 27.0);
    assert_eq!(serving.size, ServingSize::grams(51.0));
}

#[test]
fn test_resolve_per_serving_size_fallbacks() {
    let with_quantity = product("Q", 100.0, 1.0, 1.0, 1.0, 1.0).with_serving_quantity(40.0);
    assert_eq!(
        resolve_serving(&with_quantity).unwrap().size,
        ServingSize::grams(40.0)
    );

    let bare = product("B", 100.0, 1.0, 1.0, 1.0, 1.0);
    assert_eq!(resolve_serving(&bare).unwrap().size, ServingSize::one_serving());
}

#[test]
fn test_resolve_from_per_100g_with_serving_quantity() {
    let oats = Product::new("OATS", "Rolled oats")
        .with_nutrients_per_100g(379.0, 13.2, 6.5, 67.7, 1.0)
        .with_serving_quantity(40.0);

    let serving = resolve_serving(&oats).unwrap();

    assert!(approx_eq(serving.calories, 151.6));
    assert!(approx_eq(serving.macros.protein_g, 5.28));
    assert!(approx_eq(serving.macros.fat_g, 2.6));
    assert!(approx_eq(serving.macros.carbs_g, 27.08));
    assert!(approx_eq(serving.macros.sugars_g, 0.4));
    assert_eq!(serving.size, ServingSize::grams(40.0));
}

#[test]
fn test_resolve_from_per_100g_with_metric_descriptor() {
    let milk = Product::new("MILK", "Semi-skimmed milk")
        .with_nutrients_per_100g(46.0, 3.4, 1.6, 4.8, 4.8)
        .with_serving_size("1 glass (250 ml)");

    let serving = resolve_serving(&milk).unwrap();

    assert!(approx_eq(serving.calories, 115.0));
    assert_eq!(serving.size.unit, ServingUnit::Milliliters);
}

#[test]
fn test_per_100g_size_follows_serving_quantity() {
    let base = Product::new("BAR", "Granola bar")
        .with_nutrients_per_100g(450.0, 8.0, 18.0, 62.0, 25.0)
        .with_serving_quantity(40.0);

    let zero_descriptor = resolve_serving(&base.clone().with_serving_size("0 g")).unwrap();
    assert_eq!(zero_descriptor.size, ServingSize::grams(40.0));
    assert!(approx_eq(zero_descriptor.calories, 180.0));

    let other_weight = resolve_serving(&base.clone().with_serving_size("1 bar (25 g)")).unwrap();
    assert_eq!(other_weight.size, ServingSize::grams(40.0));
    assert!(approx_eq(other_weight.calories, 180.0));

    let agreeing = resolve_serving(&base.with_serving_size("1 bar (40 g)")).unwrap();
    assert_eq!(agreeing.size, ServingSize::grams(40.0));
    assert!(approx_eq(agreeing.calories, 180.0));
}

#[test]
fn test_per_100g_without_serving_weight_is_unresolvable() {
    let no_weight = Product::new("NW", "Crackers")
        .with_nutrients_per_100g(430.0, 9.0, 14.0, 66.0, 3.0)
        .with_serving_size("4 crackers");

    assert!(resolve_serving(&no_weight).is_none());
}

#[test]
fn test_per_serving_takes_precedence_over_per_100g() {
    let both = product("BOTH", 200.0, 10.0, 5.0, 20.0, 2.0)
        .with_nutrients_per_100g(400.0, 20.0, 10.0, 40.0, 4.0)
        .with_serving_quantity(25.0);

    assert_eq!(resolve_serving(&both).unwrap().calories, 200.0);
}

#[test]
fn test_missing_or_negative_values_are_unresolvable() {
    assert!(resolve_serving(&unresolvable_product("NONE")).is_none());

    let negative = product("NEG", 100.0, -1.0, 1.0, 1.0, 1.0);
    assert!(resolve_serving(&negative).is_none());

    let nan = product("NAN", f64::NAN, 1.0, 1.0, 1.0, 1.0);
    assert!(resolve_serving(&nan).is_none());
}

// ============================================================================
// Serving scaling
// ============================================================================

#[test]
fn test_scale_serving_is_proportional() {
    let bar = product("BAR", 250.0, 4.0, 12.0, 32.0, 20.0).with_serving_size("50 g");

    let half = scale_serving(&bar, 0.5).unwrap();

    assert_eq!(half.calories, 125.0);
    assert_eq!(half.macros.protein_g, 2.0);
    assert_eq!(half.macros.fat_g, 6.0);
    assert_eq!(half.macros.carbs_g, 16.0);
    assert_eq!(half.macros.sugars_g, 10.0);
    assert_eq!(half.size, ServingSize::grams(25.0));
}

#[test]
fn test_scale_serving_rejects_invalid_factors() {
    let bar = product("BAR", 250.0, 4.0, 12.0, 32.0, 20.0);

    assert!(scale_serving(&bar, 0.0).is_none());
    assert!(scale_serving(&bar, -0.5).is_none());
    assert!(scale_serving(&bar, f64::NAN).is_none());
    assert!(scale_serving(&bar, f64::INFINITY).is_none());
    assert!(scale_serving(&unresolvable_product("U"), 0.5).is_none());
}
