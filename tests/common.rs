// ABOUTME: Shared test utilities and catalog fixtures for integration tests
// ABOUTME: Provides quiet tracing setup and product builders with controlled macro profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutri_planner`

use nutri_planner::composer::ComposerConfig;
use nutri_planner::models::Product;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Product with explicit per-serving nutrients
pub fn product(
    barcode: &str,
    calories: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
    sugars_g: f64,
) -> Product {
    Product::new(barcode, format!("Product {barcode}"))
        .with_serving_nutrients(calories, protein_g, fat_g, carbs_g, sugars_g)
}

/// Product whose energy is 25% protein, 25% fat, 50% carbs, with 5% from sugar
///
/// Passes the default macro limits whenever the serving fits the budget.
pub fn balanced_product(barcode: &str, calories: f64) -> Product {
    product(
        barcode,
        calories,
        calories * 0.25 / 4.0,
        calories * 0.25 / 9.0,
        calories * 0.50 / 4.0,
        calories * 0.05 / 4.0,
    )
}

/// Product with no nutrient data at all
pub fn unresolvable_product(barcode: &str) -> Product {
    Product::new(barcode, format!("Unknown {barcode}"))
}

/// Mixed catalog of everyday products
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product("3017620422003", 539.0, 6.3, 30.9, 57.5, 56.3).with_serving_size("100 g"),
        product("5000159484695", 250.0, 3.5, 12.0, 32.0, 27.0).with_serving_size("1 bar (51 g)"),
        product("0001", 165.0, 31.0, 3.6, 0.0, 0.0)
            .with_serving_size("100 g")
            .with_labels(["en:high-protein"]),
        product("0002", 210.0, 7.5, 3.5, 36.0, 1.0)
            .with_serving_size("1 cup (185 g)")
            .with_allergens(["en:gluten"])
            .with_labels(["en:vegan"]),
        product("0003", 149.0, 7.7, 8.0, 11.7, 12.3)
            .with_serving_size("1 cup (244 ml)")
            .with_allergens(["en:milk"])
            .with_labels(["en:vegetarian"]),
        product("0004", 95.0, 0.5, 0.3, 25.0, 19.0).with_serving_size("1 apple (182 g)"),
        product("0005", 180.0, 6.0, 15.0, 6.0, 1.2)
            .with_serving_size("30 g")
            .with_allergens(["en:nuts"]),
        product("0006", 120.0, 12.0, 2.0, 14.0, 6.0)
            .with_serving_size("150 g")
            .with_allergens(["en:milk"]),
        Product::new("0007", "Rolled oats")
            .with_nutrients_per_100g(379.0, 13.2, 6.5, 67.7, 1.0)
            .with_serving_quantity(40.0)
            .with_labels(["en:vegan"]),
        Product::new("0008", "Brown rice")
            .with_nutrients_per_100g(112.0, 2.6, 0.9, 23.5, 0.4)
            .with_serving_size("200 g")
            .with_labels(["en:vegan"]),
        balanced_product("0009", 320.0).with_labels(["en:vegetarian"]),
        balanced_product("0010", 240.0),
        unresolvable_product("0011"),
    ]
}

/// Default composer configuration
pub fn default_config() -> ComposerConfig {
    ComposerConfig::default()
}

/// Composer configuration with explicit tolerances
pub fn config_with_tolerances(strict: f64, flexible: f64) -> ComposerConfig {
    ComposerConfig {
        calorie_tolerance_strict: strict,
        calorie_tolerance_flexible: flexible,
        ..ComposerConfig::default()
    }
}

/// Float comparison for computed calories and scores
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
