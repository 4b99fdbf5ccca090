// ABOUTME: Main library entry point for the Nutri Planner application
// ABOUTME: Wires configuration, logging, and catalog loading around the meal composition engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

#![deny(unsafe_code)]

//! # Nutri Planner
//!
//! Builds calorie-targeted meals from a catalog of packaged food products.
//! The composition engine lives in `nutri_composer`; this crate adds what an
//! application around it needs.
//!
//! ## Architecture
//!
//! - **Config**: `NUTRI_*` environment overrides on top of engine defaults
//! - **Logging**: `tracing-subscriber` setup driven by `RUST_LOG` and `LOG_FORMAT`
//! - **Catalog**: JSON product catalogs and preference profiles
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutri_planner::catalog::load_catalog;
//! use nutri_planner::config::PlannerConfig;
//! use nutri_planner::errors::AppResult;
//! use nutri_planner::composer::build_meal;
//!
//! fn main() -> AppResult<()> {
//!     let config = PlannerConfig::from_env()?;
//!     let catalog = load_catalog("catalog.json")?;
//!     let meal = build_meal("Lunch", 600.0, &catalog, None, false, &config.composer);
//!     println!("{} kcal in {} items", meal.actual_calories(), meal.items().len());
//!     Ok(())
//! }
//! ```

/// JSON catalog and preference loading
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Error types shared with the engine crates
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Re-export of the composition engine
pub use nutri_composer as composer;

/// Re-export of the core data models
pub use nutri_core::models;
